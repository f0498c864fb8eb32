use optarg_layout::Layout;
use optarg_layout::DEFAULT_WIDTH;
use optarg_parser::Opt;
use optarg_parser::Registry;

const HEADER: anstyle::Style = anstyle::Style::new().bold().underline();
const LABEL: anstyle::Style = anstyle::Style::new().bold();

/// Help listing for the options of a [`Registry`]
///
/// Each option gets a `--long, -s: ` label, right-aligned so all descriptions start in the
/// same column, followed by its description wrapped to the terminal width:
///
/// ```text
/// Usage: builder [options]:
///
///  --source, -s: Path to the source folder.
///     --bin, -b: Path to the binary folder.
///    --arch, -a: Target architecture. (defaults to: amd64)
/// ```
///
/// Value options with a non-empty default mention it; flags never do.
#[derive(Clone, Debug)]
pub struct Usage<'r> {
    registry: &'r Registry,
    header: Option<String>,
    width: usize,
    styled: bool,
}

impl<'r> Usage<'r> {
    /// List the options of `registry`, without a header, at [`DEFAULT_WIDTH`] columns
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            header: None,
            width: DEFAULT_WIDTH,
            styled: false,
        }
    }

    /// Start with `Usage: <bin> [options]:`
    pub fn bin(self, bin: &str) -> Self {
        self.header(format!("Usage: {bin} [options]:"))
    }

    /// Start with a custom first line
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Total line width, `0` for the default
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Emphasize the header and labels with ANSI escapes
    pub fn styled(mut self, yes: bool) -> Self {
        self.styled = yes;
        self
    }

    /// Column at which descriptions start
    pub fn column(&self) -> usize {
        let widest = self
            .registry
            .options()
            .iter()
            .map(|o| self.label(o).chars().count())
            .max()
            .unwrap_or_default();
        widest + 1
    }

    /// The listing as a string, same as [`ToString::to_string`]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the listing and flush
    pub fn write_to(&self, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Write to stdout, styled when it is a terminal
    pub fn print(&self) -> std::io::Result<()> {
        let usage = self.clone().styled(true);
        usage.write_to(&mut anstream::stdout().lock())
    }

    /// Write to stderr, styled when it is a terminal
    pub fn eprint(&self) -> std::io::Result<()> {
        let usage = self.clone().styled(true);
        usage.write_to(&mut anstream::stderr().lock())
    }

    fn label(&self, opt: &Opt) -> String {
        let markers = self.registry.markers();
        format!(
            "{}{}, {}{}: ",
            markers.long(),
            opt.long(),
            markers.short(),
            opt.short()
        )
    }

    fn style(&self, style: anstyle::Style) -> anstyle::Style {
        if self.styled {
            style
        } else {
            anstyle::Style::new()
        }
    }
}

impl std::fmt::Display for Usage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(header) = &self.header {
            let style = self.style(HEADER);
            writeln!(f, "{}{header}{}", style.render(), style.render_reset())?;
            writeln!(f)?;
        }

        let column = self.column();
        let layout = Layout::new(self.width).left_margin(column);
        let style = self.style(LABEL);
        for opt in self.registry.options() {
            let label = self.label(opt);
            let indent = column - label.chars().count();
            write!(
                f,
                "{:indent$}{}{label}{}",
                "",
                style.render(),
                style.render_reset()
            )?;

            let description = describe(opt);
            let lines = layout.wrap(&description);
            let mut lines = lines.iter();
            let first = lines.next().map(|l| l.trim()).unwrap_or_default();
            writeln!(f, "{first}")?;
            for line in lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

fn describe(opt: &Opt) -> String {
    let description = opt.description();
    if opt.is_flag() {
        return description.to_owned();
    }
    match opt.default_value().to_string() {
        default if default.is_empty() => description.to_owned(),
        default => format!("{description} (defaults to: {default})"),
    }
}
