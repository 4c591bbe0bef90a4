use gba_config::{Config, IdleOptimization, Options, PlatformEnv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), gba_config::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let factory = Options::default();
    let mut config = Config::builder()
        .with_scope("demo")
        .with_defaults(&factory)
        .build()?;

    let env = std::env::temp_dir().join("gba-config-demo");
    let env = PlatformEnv::new(env, "mgba");
    if !config.load(&env) {
        println!("No saved config at {}", env.config_path().display());
    }

    let mut options = factory.clone();
    config.map_into(&mut options);
    println!("volume={} idle={}", options.volume, options.idle_optimization);

    config.set_int("volume", options.volume / 2);
    config.set_value("idleOptimization", IdleOptimization::Remove.as_token());
    println!("frameskip={}", config.get_int("frameskip")?);

    if config.save(&env) {
        println!("Saved to {}", env.config_path().display());
    }
    Ok(())
}
