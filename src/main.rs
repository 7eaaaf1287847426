use std::{env, error::Error, path::PathBuf};

use log::{info, warn};
use model_ids::{config::ModelParams, id_gen::IdAllocator, random::RandomState};

const DEFAULT_PARAMS_FILE: &str = "rcparams.json";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let params_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PARAMS_FILE));

    let mut params = if params_path.exists() {
        ModelParams::from_file(&params_path)?
    } else {
        warn!(
            "main: {} não existe, usando parâmetros padrão",
            params_path.display()
        );
        ModelParams::default()
    };

    let mut random_state = RandomState::from_params(&mut params);

    // amostra rápida pra conferir o seed e o alocador
    let mut ids = IdAllocator::new();
    for _ in 0..5 {
        let id = ids.issue();
        info!("main: id {} -> {}", id, random_state.coin_flip());
    }

    // grava o seed de volta pra que a execução possa ser repetida
    params.write_to_file(&params_path)?;
    println!("seed: {}", random_state.seed());

    Ok(())
}
