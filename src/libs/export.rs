//! Export of employee and attendance records to CSV or JSON files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrms::db::db::Db;
//! use hrms::libs::config::DatabaseConfig;
//! use hrms::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let db = Db::open(&DatabaseConfig::memory())?;
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let written = exporter.export(&db, ExportData::All)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    db::{attendance::AttendanceLog, db::Db, employees::Employees},
    libs::{attendance::AttendanceRecord, employee::EmployeeRecord, messages::Message},
    msg_info,
};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Employees,
    Attendance,
    All,
}

impl ExportData {
    fn label(&self) -> &'static str {
        match self {
            ExportData::Employees => "employees",
            ExportData::Attendance => "attendance",
            ExportData::All => "all",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportAll<'a> {
    employees: &'a [EmployeeRecord],
    attendance: &'a [AttendanceRecord],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Writes the selected records and returns the paths of the files created.
    ///
    /// `All` in CSV produces one file per table, suffixed `_employees` and
    /// `_attendance`; in JSON it produces a single document with both arrays.
    pub fn export(&self, db: &Db, data: ExportData) -> Result<Vec<PathBuf>> {
        let path = self.output_path(data);

        match data {
            ExportData::Employees => {
                let employees = Employees::new(db).list()?;
                self.write_records(&path, &employees)?;
                Ok(vec![path])
            }
            ExportData::Attendance => {
                let attendance = AttendanceLog::new(db).list()?;
                self.write_records(&path, &attendance)?;
                Ok(vec![path])
            }
            ExportData::All => {
                msg_info!(Message::ExportingAllData);
                let employees = Employees::new(db).list()?;
                let attendance = AttendanceLog::new(db).list()?;

                match self.format {
                    ExportFormat::Json => {
                        let document = ExportAll {
                            employees: &employees,
                            attendance: &attendance,
                        };
                        write_json(&path, &document)?;
                        Ok(vec![path])
                    }
                    ExportFormat::Csv => {
                        let employees_path = with_suffix(&path, "employees");
                        let attendance_path = with_suffix(&path, "attendance");
                        write_csv(&employees_path, &employees)?;
                        write_csv(&attendance_path, &attendance)?;
                        Ok(vec![employees_path, attendance_path])
                    }
                }
            }
        }
    }

    fn output_path(&self, data: ExportData) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "hrms_{}_{}.{}",
                data.label(),
                Local::now().format("%Y%m%d_%H%M%S"),
                self.format.extension()
            ))
        })
    }

    fn write_records<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => write_csv(path, records),
            ExportFormat::Json => write_json(path, &records),
        }
    }
}

fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    File::create(path)?.write_all(json.as_bytes())?;
    Ok(())
}

/// `out/report.csv` + `employees` -> `out/report_employees.csv`
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "hrms".to_string());
    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    };
    path.with_file_name(file_name)
}
