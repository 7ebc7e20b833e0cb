use crate::{CliOptions, Mode};
use anyhow::bail;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: platoon-planner [--matrix matrix.csv] [--log plan.json] < rosters.txt\n       \
platoon-planner --battles battles.json [--output plans.json]\n       \
platoon-planner --survey N [--seed SEED]";

/// Parses flags (program name already stripped). `None` means help was requested.
pub fn parse_args<I>(args: I) -> anyhow::Result<Option<CliOptions>>
where
    I: IntoIterator<Item = String>,
{
    let mut matrix_path = None;
    let mut log_path = None;
    let mut battles_path = None;
    let mut output_path = None;
    let mut survey = None;
    let mut seed = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--matrix" => {
                matrix_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--matrix requires a path (e.g. --matrix matrix.csv)")
                })?);
            }
            "--log" => {
                log_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--log requires a path (e.g. --log plan.json)")
                })?);
            }
            "--battles" => {
                battles_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--battles requires a path (e.g. --battles battles.json)")
                })?);
            }
            "--output" => {
                output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output plans.json)")
                })?);
            }
            "--survey" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--survey requires a number"))?;
                survey = Some(val.parse::<usize>()?);
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = Some(val.parse::<u64>()?);
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("Unknown argument {other}"),
        }
    }

    let mode = match (battles_path, survey) {
        (Some(_), Some(_)) => bail!("--battles and --survey cannot be combined"),
        (Some(battles_path), None) => {
            reject_flags(
                "--battles",
                &[
                    ("--matrix", matrix_path.is_some()),
                    ("--log", log_path.is_some()),
                    ("--seed", seed.is_some()),
                ],
            )?;
            Mode::Batch {
                battles_path,
                output_path: output_path.unwrap_or_else(|| PathBuf::from("plans.json")),
            }
        }
        (None, Some(trials)) => {
            reject_flags(
                "--survey",
                &[
                    ("--matrix", matrix_path.is_some()),
                    ("--log", log_path.is_some()),
                    ("--output", output_path.is_some()),
                ],
            )?;
            Mode::Survey {
                trials,
                seed: seed.unwrap_or(0),
            }
        }
        (None, None) => {
            reject_flags(
                "stdin planning",
                &[
                    ("--output", output_path.is_some()),
                    ("--seed", seed.is_some()),
                ],
            )?;
            Mode::Interactive {
                matrix_path,
                log_path,
            }
        }
    };
    Ok(Some(CliOptions { mode }))
}

fn reject_flags(mode: &str, flags: &[(&str, bool)]) -> anyhow::Result<()> {
    if let Some((flag, _)) = flags.iter().find(|(_, given)| *given) {
        bail!("{flag} cannot be used with {mode}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn error_of(list: &[&str]) -> String {
        parse_args(args(list))
            .expect_err("flags should be rejected")
            .to_string()
    }

    #[test]
    fn defaults_to_stdin_planning() {
        let opts = parse_args(args(&["--matrix", "m.csv"]))
            .expect("valid")
            .expect("not help");
        match opts.mode {
            Mode::Interactive {
                matrix_path,
                log_path,
            } => {
                assert_eq!(matrix_path, Some(PathBuf::from("m.csv")));
                assert_eq!(log_path, None);
            }
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn batch_uses_default_output() {
        let opts = parse_args(args(&["--battles", "b.json"]))
            .expect("valid")
            .expect("not help");
        match opts.mode {
            Mode::Batch {
                battles_path,
                output_path,
            } => {
                assert_eq!(battles_path, PathBuf::from("b.json"));
                assert_eq!(output_path, PathBuf::from("plans.json"));
            }
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn survey_reads_seed() {
        let opts = parse_args(args(&["--survey", "10", "--seed", "42"]))
            .expect("valid")
            .expect("not help");
        assert!(matches!(opts.mode, Mode::Survey { trials: 10, seed: 42 }));
    }

    #[test]
    fn help_returns_none() {
        assert!(parse_args(args(&["-h"])).expect("valid").is_none());
    }

    #[test]
    fn batch_rejects_stdin_only_flags() {
        assert_eq!(
            error_of(&["--battles", "b.json", "--matrix", "m.csv"]),
            "--matrix cannot be used with --battles"
        );
        assert_eq!(
            error_of(&["--log", "l.json", "--battles", "b.json"]),
            "--log cannot be used with --battles"
        );
        assert_eq!(
            error_of(&["--battles", "b.json", "--seed", "3"]),
            "--seed cannot be used with --battles"
        );
    }

    #[test]
    fn survey_rejects_file_flags() {
        assert_eq!(
            error_of(&["--survey", "5", "--log", "l.json"]),
            "--log cannot be used with --survey"
        );
        assert_eq!(
            error_of(&["--survey", "5", "--output", "o.json"]),
            "--output cannot be used with --survey"
        );
    }

    #[test]
    fn stdin_planning_rejects_batch_flags() {
        assert_eq!(
            error_of(&["--output", "o.json"]),
            "--output cannot be used with stdin planning"
        );
        assert_eq!(
            error_of(&["--battles", "b.json", "--survey", "2"]),
            "--battles and --survey cannot be combined"
        );
    }
}
