use optarg::Opt;
use optarg::Registry;
use optarg::Usage;

const ERROR: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)));

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            "s",
            "source",
            "Path to the source folder. Long descriptions are wrapped to the width of the \
                terminal and indented so they line up with the other descriptions.",
            "",
        )
        .register("b", "bin", "Path to the binary folder.", "")
        .register("a", "arch", "Target architecture.", "amd64")
        .register("j", "jobs", "Number of packages to build in parallel.", 1)
        .register("n", "noproc", "Skip pre/post processing.", false)
        .register(
            "p",
            "purge",
            "Clean compiled packages after linking is complete.",
            false,
        )
        .register("h", "help", "Print this help and exit.", false);
    registry
}

fn main() -> optarg::Result<()> {
    let raw = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    let bin = raw
        .first()
        .and_then(|b| std::path::Path::new(b).file_stem())
        .map(|b| b.to_string_lossy().into_owned())
        .unwrap_or_else(|| "builder".to_owned());
    let width = std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(optarg::DEFAULT_WIDTH);

    let mut registry = registry();
    let remainder = match registry.parse(&raw) {
        Ok(parsed) => parsed.into_remainder(),
        Err(err) => {
            anstream::eprintln!("{}error:{} {err}", ERROR.render(), ERROR.render_reset());
            anstream::eprintln!();
            Usage::new(&registry).bin(&bin).width(width).eprint()?;
            std::process::exit(1);
        }
    };

    if registry.find("help").is_some_and(Opt::to_bool) {
        Usage::new(&registry).bin(&bin).width(width).print()?;
        return Ok(());
    }

    // Options left off the command line report their default
    let value = |name: &str| match registry.find(name) {
        Some(opt) => opt
            .value()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| opt.default_value().to_string()),
        None => String::new(),
    };
    println!("source: {}", value("source"));
    println!("bin: {}", value("bin"));
    println!("arch: {}", value("arch"));
    println!("jobs: {}", registry.find("jobs").map(Opt::int).unwrap_or_default());
    println!("noproc: {}", value("noproc"));
    println!("purge: {}", value("purge"));
    println!("remainder: {}", remainder.join(" "));

    Ok(())
}
