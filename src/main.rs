//! Binary entrypoint: load the corpus, train, and print greedy samples.

use rand::{rngs::StdRng, SeedableRng};

use namegen::config;
use namegen::corpus::load_from_dir;
use namegen::encoding::Alphabet;
use namegen::model::NameRnn;
use namegen::{sampling, training};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = config::from_env()?;
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let alphabet = Alphabet::default();
    let corpus = load_from_dir(&cfg.data_dir, &alphabet)?;
    log::info!(
        "loaded {} categories, {} names",
        corpus.category_count(),
        corpus.example_count()
    );

    let model = NameRnn::new(
        corpus.category_count(),
        alphabet.size(),
        cfg.hidden_size,
        cfg.dropout,
        cfg.init_std,
        &mut rng,
    );
    log::info!("{} parameters", model.params().len());

    let history = training::train(&model, &corpus, &alphabet, &cfg, &mut rng)?;
    if let Some(last) = history.last() {
        log::info!("final averaged loss {last:.4}");
    }

    for category in corpus.categories() {
        for seed in cfg.sample_seeds.chars() {
            let name = sampling::sample(&model, &corpus, &alphabet, category, seed, cfg.max_length)?;
            println!("{category} / {seed}: {name}");
        }
    }
    Ok(())
}
