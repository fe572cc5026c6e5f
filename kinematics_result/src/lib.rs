use std::{collections::HashMap, fs::File, io::BufWriter, path::Path, path::PathBuf};

use csv::Writer;
use kinematics::{Pose2D, Pose3D};
use thiserror::Error;

pub type ResultWriter = Writer<BufWriter<File>>;

#[derive(Debug, Error)]
pub enum ResultErrors {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("no result writer with id {0}")]
    WriterNotFound(u32),
}

/// Owns one csv writer per recorded stream, all under `result_path`.
pub struct ResultManager {
    writers: HashMap<u32, ResultWriter>,
    pub result_path: PathBuf,
    next_id: u32,
}

impl ResultManager {
    pub fn new(result_path: PathBuf) -> Self {
        Self {
            writers: HashMap::new(),
            result_path,
            next_id: 0,
        }
    }

    /// Creates `<result_path>/<name>.csv`, writes the header row and
    /// returns the id used for subsequent records.
    pub fn new_writer<S: AsRef<str>>(
        &mut self,
        name: &str,
        headers: &[S],
    ) -> Result<u32, ResultErrors> {
        std::fs::create_dir_all(&self.result_path)?;

        let file = File::create(self.file_path(name))?;
        let mut writer = Writer::from_writer(BufWriter::new(file));
        writer.write_record(headers.iter().map(|h| h.as_ref()))?;

        let id = self.next_id;
        self.writers.insert(id, writer);
        self.next_id += 1;
        Ok(id)
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.result_path.join(format!("{name}.csv"))
    }

    pub fn write_record(&mut self, id: u32, content: &[String]) -> Result<(), ResultErrors> {
        let writer = self
            .writers
            .get_mut(&id)
            .ok_or(ResultErrors::WriterNotFound(id))?;
        writer.write_record(content)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ResultErrors> {
        for writer in self.writers.values_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

/// A per-frame value that can be written as one csv row.
pub trait ResultRecord {
    /// Column names, starting with `frame`.
    fn result_headers(&self) -> Vec<String>;
    fn result_content(&self, frame: usize) -> Vec<String>;
}

impl ResultRecord for Pose2D {
    fn result_headers(&self) -> Vec<String> {
        let mut headers = vec!["frame".to_string()];
        for i in 0..self.len() {
            headers.push(format!("x{i}"));
            headers.push(format!("y{i}"));
        }
        headers
    }

    fn result_content(&self, frame: usize) -> Vec<String> {
        let mut content = vec![frame.to_string()];
        for p in self.points() {
            content.push(p.x.to_string());
            content.push(p.y.to_string());
        }
        content
    }
}

impl ResultRecord for Pose3D {
    fn result_headers(&self) -> Vec<String> {
        let mut headers = vec!["frame".to_string()];
        for i in 0..self.len() {
            headers.push(format!("x{i}"));
            headers.push(format!("y{i}"));
            headers.push(format!("z{i}"));
        }
        headers
    }

    fn result_content(&self, frame: usize) -> Vec<String> {
        let mut content = vec![frame.to_string()];
        for p in self.points() {
            content.push(p.x.to_string());
            content.push(p.y.to_string());
            content.push(p.z.to_string());
        }
        content
    }
}

/// Records one stream of frames. The writer is opened lazily on the first
/// record so the header matches the shape of the recorded values.
#[derive(Debug)]
pub struct FrameRecorder {
    name: String,
    result_id: Option<u32>,
}

impl FrameRecorder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            result_id: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record<R: ResultRecord>(
        &mut self,
        results: &mut ResultManager,
        frame: usize,
        value: &R,
    ) -> Result<(), ResultErrors> {
        let id = match self.result_id {
            Some(id) => id,
            None => {
                let id = results.new_writer(&self.name, &value.result_headers())?;
                self.result_id = Some(id);
                id
            }
        };
        results.write_record(id, &value.result_content(frame))
    }
}

/// Reads a recorded csv back as header plus rows.
pub fn read_results(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), ResultErrors> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(String::from).collect());
    }
    Ok((headers, rows))
}
