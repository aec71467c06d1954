use crate::error::Error;
use crate::options::{InputSource, OutputSink};
use std::fs;
use std::path::Path;

pub fn resolve_input(input: &InputSource) -> Result<String, Error> {
    match input {
        InputSource::Data(text) => Ok(text.clone()),
        InputSource::File(path) => read_text(path),
    }
}

fn read_text(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// File sinks are overwritten or created; stdout gets a trailing newline.
pub fn write_output(output: &OutputSink, text: &str) -> Result<(), Error> {
    match output {
        OutputSink::Stdout => {
            println!("{text}");
            Ok(())
        }
        OutputSink::File(path) => fs::write(path, text).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}
