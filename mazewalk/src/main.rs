use clap::Parser;
use mazewalk_lib::{AppConfig, run, session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::parse();
    let mut session = session(&config)?;
    let report = run(&mut session, &config)?;

    if config.print {
        println!("{}", session.snapshot());
    }
    println!(
        "{}: {} in {} steps ({:.1?})",
        session.config().algorithm,
        report.result,
        report.steps,
        report.elapsed
    );
    if let Some(why) = report.exhausted {
        println!("stopped early: {why:?}");
    }
    Ok(())
}
