use uniqchars::report;

/// Inputs audited when the binary is run without arguments.
const DEMO_INPUTS: &[&str] = &[
    "He1lo World",
    "ABCA123",
    "abcdefg",
    "",
    "AaBbCc",
    "1234567890",
    "!@#$%^&*()_+|}{:?><,./;[]=-",
    "!@#$%^&*()_+|}{:?><,./;[]]=-",
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        DEMO_INPUTS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for input in inputs {
        let report = report::audit(input);
        log::info!("{report}");
        log::debug!("{}", report.to_json()?);
    }

    Ok(())
}
