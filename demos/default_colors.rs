use duo_log::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedDefaults::new();
    let logger = Logger::builder(&shared)
        .name("Demo")
        .term_level(Severity::Verbose)
        .build()?;

    logger.verbose("Plain verbose")?;
    logger.debug("Bright green debug")?;
    logger.info("Bright cyan info")?;
    logger.warning("Bright yellow warning")?;
    logger.error("Red error")?;
    logger.critical("Black on red critical")?;
    logger.print("Printed as is")?;

    // Installed as the log facade, the same styles apply to the log macros
    logger.init()?;
    log::warn!("Yellow warning through log");
    Ok(())
}
