use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // the driver's own output goes to stdout, keep logs apart.
        .with_writer(std::io::stderr)
        .without_time();
    let res = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::runtime(
        format!("failed to install tracing subscriber {}", err).as_str(), None))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::utils::logging::setup_tracing;

    #[test]
    fn test_should_install_tracing_once() {
        let config = Configuration::new("test");
        let _ = setup_tracing(&config);
        let res = setup_tracing(&config);
        assert!(matches!(res, Err(LibraryError::Runtime{ message: _, reason_code: _ })));
    }
}
