//! CLI surface: the flat `-flag value` pair list and its validation rules.

use crate::cipher::{Algorithm, Mode};
use crate::error::Error;
use std::path::PathBuf;

pub const DEFAULT_KEY: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Data(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

#[derive(Debug)]
pub struct Options {
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub key: i64,
    pub input: InputSource,
    pub output: OutputSink,
}

impl Options {
    /// Validates the whole argument list up front; nothing downstream runs
    /// unless exactly one input source and a well-formed configuration came
    /// out of it. A repeated flag is not an error, the last occurrence wins.
    pub fn parse(args: &[String]) -> Result<Self, Error> {
        if args.is_empty() {
            return Err(Error::InvalidArguments("no arguments given".into()));
        }

        let mut mode = Mode::Enc;
        let mut algorithm = Algorithm::Shift;
        let mut key = DEFAULT_KEY;
        let mut data: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;

        let mut it = args.iter();
        while let Some(flag) = it.next() {
            let value = it
                .next()
                .ok_or_else(|| Error::InvalidArguments(format!("missing value for {flag}")))?;
            match flag.as_str() {
                "-mode" => {
                    mode = match value.as_str() {
                        "enc" => Mode::Enc,
                        "dec" => Mode::Dec,
                        other => return Err(Error::UnknownMode(other.to_string())),
                    }
                }
                "-alg" => {
                    algorithm = match value.as_str() {
                        "shift" => Algorithm::Shift,
                        "unicode" => Algorithm::Unicode,
                        other => return Err(Error::UnknownAlgorithm(other.to_string())),
                    }
                }
                "-key" => {
                    key = value.parse().map_err(|_| {
                        Error::InvalidArguments(format!("key is not an integer: {value}"))
                    })?
                }
                "-data" => data = Some(value.clone()),
                "-in" => input_file = Some(PathBuf::from(value)),
                "-out" => output_file = Some(PathBuf::from(value)),
                other => return Err(Error::InvalidArguments(format!("unknown flag: {other}"))),
            }
        }

        let input = match (data, input_file) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidArguments(
                    "-data and -in are mutually exclusive".into(),
                ))
            }
            (Some(d), None) => InputSource::Data(d),
            (None, Some(p)) => InputSource::File(p),
            (None, None) => {
                return Err(Error::InvalidArguments(
                    "no input given, pass -data or -in".into(),
                ))
            }
        };

        Ok(Self {
            mode,
            algorithm,
            key,
            input,
            output: output_file.map_or(OutputSink::Stdout, OutputSink::File),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{InputSource, Options, OutputSink, DEFAULT_KEY};
    use crate::cipher::{Algorithm, Mode};
    use crate::error::Error;

    fn parse(args: &[&str]) -> Result<Options, Error> {
        let owned: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Options::parse(&owned)
    }

    #[test]
    fn defaults_apply_when_only_data_is_given() {
        let opts = parse(&["-data", "hello"]).expect("valid");
        assert_eq!(opts.mode, Mode::Enc);
        assert_eq!(opts.algorithm, Algorithm::Shift);
        assert_eq!(opts.key, DEFAULT_KEY);
        assert_eq!(opts.input, InputSource::Data("hello".into()));
        assert_eq!(opts.output, OutputSink::Stdout);
    }

    #[test]
    fn all_flags_parse() {
        let opts = parse(&[
            "-mode", "dec", "-alg", "unicode", "-key", "-3", "-in", "a.txt", "-out", "b.txt",
        ])
        .expect("valid");
        assert_eq!(opts.mode, Mode::Dec);
        assert_eq!(opts.algorithm, Algorithm::Unicode);
        assert_eq!(opts.key, -3);
        assert_eq!(opts.input, InputSource::File("a.txt".into()));
        assert_eq!(opts.output, OutputSink::File("b.txt".into()));
    }

    #[test]
    fn repeated_flag_last_occurrence_wins() {
        let opts = parse(&["-key", "1", "-data", "x", "-key", "9"]).expect("valid");
        assert_eq!(opts.key, 9);
    }

    #[test]
    fn empty_argument_list_is_rejected() {
        assert!(matches!(parse(&[]), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(
            parse(&["-data", "x", "-volume", "11"]),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn dangling_flag_is_rejected() {
        assert!(matches!(
            parse(&["-data", "x", "-key"]),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn non_integer_key_is_rejected() {
        assert!(matches!(
            parse(&["-data", "x", "-key", "five"]),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn unrecognized_mode_and_algorithm_are_distinct_errors() {
        assert!(matches!(
            parse(&["-data", "x", "-mode", "scramble"]),
            Err(Error::UnknownMode(_))
        ));
        assert!(matches!(
            parse(&["-data", "x", "-alg", "rot13"]),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn data_and_in_conflict_in_either_order() {
        assert!(matches!(
            parse(&["-data", "x", "-in", "a.txt"]),
            Err(Error::InvalidArguments(_))
        ));
        assert!(matches!(
            parse(&["-in", "a.txt", "-data", "x"]),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn missing_input_source_is_rejected() {
        assert!(matches!(
            parse(&["-mode", "enc", "-key", "3"]),
            Err(Error::InvalidArguments(_))
        ));
    }
}
