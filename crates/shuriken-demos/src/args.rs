use anyhow::{bail, Context, Result};

use crate::demo::DemoKind;

pub const USAGE: &str = "usage: shuriken-demos <triangle|spinning|shuriken> [--frames N]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub demo: DemoKind,
    /// Exit after this many frames.
    pub frames: Option<u64>,
}

impl Args {
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut demo = None;
        let mut frames = None;

        let mut it = args.into_iter().map(Into::into);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--frames" => {
                    let value = it.next().context("missing value for --frames")?;
                    let n = value
                        .parse::<u64>()
                        .with_context(|| format!("invalid --frames value `{value}`"))?;
                    if n == 0 {
                        bail!("--frames must be > 0");
                    }
                    frames = Some(n);
                }
                flag if flag.starts_with("--") => bail!("unknown option `{flag}`\n{USAGE}"),
                name => {
                    if demo.is_some() {
                        bail!("more than one demo given\n{USAGE}");
                    }
                    demo = Some(name.parse::<DemoKind>()?);
                }
            }
        }

        let demo = demo.with_context(|| format!("no demo given\n{USAGE}"))?;
        Ok(Self { demo, frames })
    }
}
