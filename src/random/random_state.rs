use frand::Rand;
use log::info;

use crate::config::ModelParams;

// seeds novos ficam em [0, 10^8), curtos o bastante pra anotar e reusar
const FRESH_SEED_LIMIT: u64 = 100_000_000;

/// Gerador pseudo-aleatório com dono explícito.
///
/// Nada de estado global: quem precisa sortear recebe o `RandomState` por
/// referência, e o mesmo seed sempre reproduz a mesma sequência.
pub struct RandomState {
    seed: u64,
    rng: Rand,
}

impl RandomState {
    pub fn with_seed(seed: u64) -> RandomState {
        RandomState {
            seed,
            rng: Rand::with_seed(seed),
        }
    }

    /// Usa o `model.RandomState` dos parâmetros, sorteando e gravando um novo se não houver.
    pub fn from_params(params: &mut ModelParams) -> RandomState {
        let seed = params.ensure_seed(Self::fresh_seed);
        info!("random: seeding with {}", seed);
        Self::with_seed(seed)
    }

    pub fn fresh_seed() -> u64 {
        Rand::new().gen::<u64>() % FRESH_SEED_LIMIT
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sorteio uniforme em [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// `true` com probabilidade `true_prob`.
    pub fn boolean_choice(&mut self, true_prob: f64) -> bool {
        self.uniform() < true_prob
    }

    pub fn coin_flip(&mut self) -> bool {
        self.boolean_choice(0.5)
    }
}
