//! HeaderGenerator - embed config files into a C header.
//!
//! ## Build Process
//!
//! 1. Derive symbol and display names for every input (in order)
//! 2. Read each input fully as raw bytes
//! 3. Render notice, per-file arrays and the two index tables
//! 4. Write the header and report a SHA-256 fingerprint of it
//!
//! ## Usage
//!
//! ```rust,ignore
//! let generator = HeaderGenerator::new(inputs, PathBuf::from("camera_modules_config.h"));
//! let summary = generator.generate()?;
//! ```

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::literal;
use super::symbol::ConfigSymbol;
use crate::config::CameraConfigManifest;
use crate::error::{GeneratorError, Result};

/// Index table holding pointers to every embedded config
pub const CONFIG_TABLE_NAME: &str = "cameraConfigTable";

/// Index table holding the display name of every embedded config
pub const CONFIG_STRING_TABLE_NAME: &str = "cameraConfigString";

/// Comment block written at the top of every generated header
pub const NOTICE: &str = "\
/* Copyright (c) 2016-2017 NVIDIA CORPORATION.  All rights reserved.
 *
 * NVIDIA CORPORATION and its licensors retain all intellectual property
 * and proprietary rights in and to this software, related documentation
 * and any modifications thereto.  Any use, reproduction, disclosure or
 * distribution of this software and related documentation without an express
 * license agreement from NVIDIA CORPORATION is strictly prohibited.*/
";

pub const GENERATED_MARKER: &str = "// GENERATED FILE - DO NOT MODIFY!\n";

/// One config file as it will appear in the header
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    pub symbol: ConfigSymbol,
    pub contents: Vec<u8>,
}

impl HeaderEntry {
    /// Array length written in the declaration: payload plus one for the NUL
    pub fn declared_size(&self) -> usize {
        self.contents.len() + 1
    }
}

/// All entries of a header, in input order
#[derive(Debug, Clone, Default)]
pub struct GeneratedHeader {
    pub entries: Vec<HeaderEntry>,
}

impl GeneratedHeader {
    pub fn symbols(&self) -> impl Iterator<Item = &ConfigSymbol> {
        self.entries.iter().map(|e| &e.symbol)
    }

    /// Write the complete header text to `out`.
    pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(NOTICE.as_bytes())?;
        out.write_all(GENERATED_MARKER.as_bytes())?;

        for entry in &self.entries {
            writeln!(
                out,
                "const char {}[{}] =",
                entry.symbol.symbol,
                entry.declared_size()
            )?;
            literal::write_literal(out, &entry.contents)?;
        }

        let count = self.entries.len();

        writeln!(out, "const char * {CONFIG_TABLE_NAME}[{count}] = {{")?;
        for symbol in self.symbols() {
            writeln!(out, "\t{},", symbol.symbol)?;
        }
        writeln!(out, "}};")?;

        writeln!(out, "const char * {CONFIG_STRING_TABLE_NAME}[{count}] = {{")?;
        for symbol in self.symbols() {
            writeln!(out, "\t\"{}\",", symbol.display)?;
        }
        writeln!(out, "}};")?;

        Ok(())
    }

    /// Render the header into memory.
    pub fn render(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render_to(&mut buf)?;
        Ok(buf)
    }
}

/// Names an input would get, without reading its contents
#[derive(Debug, Clone, Serialize)]
pub struct PlannedEntry {
    pub index: usize,
    pub path: PathBuf,
    #[serde(flatten)]
    pub symbol: ConfigSymbol,
}

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub output: PathBuf,
    pub entries: usize,
    pub bytes_written: usize,
    /// Hex SHA-256 of the written header
    pub sha256: String,
}

/// Outcome of comparing a fresh rendering against the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Generator for one output header from an ordered list of config files.
#[derive(Debug, Clone)]
pub struct HeaderGenerator {
    inputs: Vec<PathBuf>,
    output: PathBuf,
}

impl HeaderGenerator {
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self { inputs, output }
    }

    /// Build a generator from an already-resolved manifest
    pub fn from_manifest(manifest: &CameraConfigManifest) -> Self {
        Self::new(manifest.inputs.clone(), manifest.output.clone())
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Derive names for every input, warning about names that would not
    /// compile. Nothing is read from disk.
    pub fn plan(&self) -> Result<Vec<PlannedEntry>> {
        let mut seen = HashSet::new();
        let mut planned = Vec::with_capacity(self.inputs.len());

        for (index, path) in self.inputs.iter().enumerate() {
            let symbol = ConfigSymbol::from_path(path)?;

            if !symbol.is_c_identifier() {
                tracing::warn!(
                    path = %path.display(),
                    symbol = %symbol.symbol,
                    "derived symbol is not a valid C identifier"
                );
            }
            if !seen.insert(symbol.symbol.clone()) {
                tracing::warn!(
                    path = %path.display(),
                    symbol = %symbol.symbol,
                    "duplicate symbol, header will not compile"
                );
            }

            planned.push(PlannedEntry {
                index,
                path: path.clone(),
                symbol,
            });
        }

        Ok(planned)
    }

    /// Read every input in order.
    pub fn collect(&self) -> Result<GeneratedHeader> {
        let mut entries = Vec::with_capacity(self.inputs.len());

        for planned in self.plan()? {
            let contents =
                std::fs::read(&planned.path).map_err(|source| GeneratorError::ReadInput {
                    path: planned.path.clone(),
                    source,
                })?;

            tracing::info!(
                file = %planned.path.file_name().unwrap_or_default().to_string_lossy(),
                bytes = contents.len(),
                "embedding config"
            );

            entries.push(HeaderEntry {
                symbol: planned.symbol,
                contents,
            });
        }

        Ok(GeneratedHeader { entries })
    }

    /// Collect inputs and overwrite the output header.
    ///
    /// All inputs are read before the output is opened, so a missing input
    /// leaves an existing header untouched. A failed write may still leave a
    /// truncated file behind.
    pub fn generate(&self) -> Result<GenerationSummary> {
        let header = self.collect()?;
        let rendered = header.render().map_err(|source| self.write_error(source))?;

        let file = File::create(&self.output).map_err(|source| GeneratorError::CreateOutput {
            path: self.output.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&rendered)
            .and_then(|_| writer.flush())
            .map_err(|source| self.write_error(source))?;

        let summary = GenerationSummary {
            output: self.output.clone(),
            entries: header.entries.len(),
            bytes_written: rendered.len(),
            sha256: fingerprint(&rendered),
        };

        tracing::info!(
            output = %summary.output.display(),
            entries = summary.entries,
            bytes = summary.bytes_written,
            sha256 = %summary.sha256,
            "header written"
        );

        Ok(summary)
    }

    /// Compare what would be generated with the existing output, without
    /// writing anything.
    pub fn check(&self) -> Result<CheckOutcome> {
        let header = self.collect()?;
        let rendered = header.render().map_err(|source| self.write_error(source))?;

        let existing = match std::fs::read(&self.output) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
            Err(source) => {
                return Err(GeneratorError::ReadOutput {
                    path: self.output.clone(),
                    source,
                })
            }
        };

        if existing == rendered {
            Ok(CheckOutcome::UpToDate)
        } else {
            tracing::debug!(
                expected = %fingerprint(&rendered),
                actual = %fingerprint(&existing),
                "header content differs"
            );
            Ok(CheckOutcome::Stale)
        }
    }

    /// Fail unless the existing output matches a fresh rendering.
    pub fn ensure_current(&self) -> Result<()> {
        match self.check()? {
            CheckOutcome::UpToDate => Ok(()),
            CheckOutcome::Stale => Err(GeneratorError::HeaderStale {
                path: self.output.clone(),
            }),
            CheckOutcome::Missing => Err(GeneratorError::HeaderMissing {
                path: self.output.clone(),
            }),
        }
    }

    fn write_error(&self, source: io::Error) -> GeneratorError {
        GeneratorError::WriteOutput {
            path: self.output.clone(),
            source,
        }
    }
}

/// Hex SHA-256 digest of rendered header bytes
pub fn fingerprint(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
