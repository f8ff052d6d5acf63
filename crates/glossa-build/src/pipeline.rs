//! The generator run: walk, extract, render, write.
//!
//! Every document is rendered in memory before the first one is written, so
//! a missing root, a missing template, or an unreadable note stops the run
//! without touching the tree. A failed write still leaves earlier documents
//! in place.

use std::path::{Path, PathBuf};

use glossa_core::KeywordIndex;

use crate::config::Config;
use crate::error::{BuildError, BuildResult};
use crate::extract::extract_index;
use crate::index::render_index;
use crate::readme::{read_template, render_directory_readme, render_root_readme};
use crate::walk::{TreeWalk, TreeWalker};

/// Generates READMEs and the keyword index for one documentation root.
#[derive(Debug, Clone)]
pub struct Generator {
    root: PathBuf,
    config: Config,
    dry_run: bool,
}

/// The result of walking the root and scanning its notes.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    pub walk: TreeWalk,
    pub index: KeywordIndex,
}

/// A rendered document and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub contents: String,
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories that received a README (the root not included).
    pub directories: usize,
    /// Markdown notes scanned for keywords.
    pub notes: usize,
    /// Distinct index terms.
    pub keywords: usize,
    /// Documents written, or that would have been written on a dry run.
    pub documents: Vec<PathBuf>,
    pub dry_run: bool,
}

impl Generator {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: Config::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Render everything but write nothing.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and build the keyword index.
    ///
    /// # Errors
    /// Fails on a missing root, a walk error, or an unreadable note.
    pub fn scan(&self) -> BuildResult<Scan> {
        let walk = TreeWalker::new(&self.root)
            .with_config(&self.config)
            .walk()?;
        let index = extract_index(&self.root, &walk.markdown)?;
        Ok(Scan { walk, index })
    }

    /// Render the root README, one README per directory, and the index.
    ///
    /// # Errors
    /// Fails when a template is missing or unreadable.
    pub fn render(&self, scan: &Scan) -> BuildResult<Vec<Document>> {
        let root_template = read_template(&self.root.join(&self.config.readme_template))?;
        let index_template = read_template(&self.root.join(&self.config.index_template))?;

        let mut documents = Vec::with_capacity(scan.walk.directories.len() + 2);

        log::info!("Creating top-level {}", self.config.readme_name);
        documents.push(Document {
            path: self.root.join(&self.config.readme_name),
            contents: render_root_readme(&root_template, &scan.walk.directories),
        });

        for dir in &scan.walk.directories {
            log::info!("Creating readme in {}", dir.relative.display());
            documents.push(Document {
                path: dir.path.join(&self.config.readme_name),
                contents: render_directory_readme(dir, scan.walk.files_beneath(dir))?,
            });
        }

        log::info!("Building {}", self.config.index_name);
        documents.push(Document {
            path: self.root.join(&self.config.index_name),
            contents: render_index(&index_template, &scan.index),
        });

        Ok(documents)
    }

    /// Run the whole generator.
    ///
    /// # Errors
    /// Any [`BuildError`] stops the run.
    pub fn run(&self) -> BuildResult<RunSummary> {
        let scan = self.scan()?;
        let documents = self.render(&scan)?;

        if self.dry_run {
            log::info!("Dry run: {} documents not written", documents.len());
        } else {
            for doc in &documents {
                write_document(doc)?;
            }
        }

        Ok(RunSummary {
            directories: scan.walk.directories.len(),
            notes: scan.walk.markdown.len(),
            keywords: scan.index.len(),
            documents: documents.into_iter().map(|d| d.path).collect(),
            dry_run: self.dry_run,
        })
    }
}

fn write_document(doc: &Document) -> BuildResult<()> {
    log::debug!("Writing {}", doc.path.display());
    std::fs::write(&doc.path, &doc.contents).map_err(|source| BuildError::Write {
        path: doc.path.clone(),
        source,
    })
}
