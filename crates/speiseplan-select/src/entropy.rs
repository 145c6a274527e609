//! Zufallsquelle für die Auswahl.

use rand::seq::SliceRandom;
use rand::Rng;

/// Alles, was die Auswahl an Zufall braucht.
///
/// Für jeden [`rand::Rng`] implementiert; Tests können eine feste Quelle
/// einsetzen.
pub trait Entropy {
    /// Gleichverteiltes Mischen.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Ziehung aus einer Exponentialverteilung mit Rate `rate` (Erwartungswert `1 / rate`).
    fn exponential(&mut self, rate: f64) -> f64;
}

impl<R: Rng + ?Sized> Entropy for R {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }

    fn exponential(&mut self, rate: f64) -> f64 {
        // Inversionsmethode; 1 - u liegt in (0, 1], der Logarithmus bleibt endlich.
        let u: f64 = self.gen();
        -(1.0 - u).ln() / rate
    }
}
