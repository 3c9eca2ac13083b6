//! Paths command handler.
//!
//! Displays how every toolchain binary resolves for a project, for
//! diagnosing editor and build integrations.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use rescript_locate_core::{BinaryName, HostPlatform, ResolutionRequest, monorepo_root};
use rescript_locate_runtime::BinaryResolver;

/// Resolution result for every binary, captured in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryReport {
    pub project_root: PathBuf,
    pub host: HostPlatform,
    pub binaries: Vec<(BinaryName, Option<PathBuf>)>,
    /// Derived from the wrapper script, falling back to the compiler.
    pub monorepo_root: Option<PathBuf>,
}

impl BinaryReport {
    pub async fn collect(resolver: &BinaryResolver, project_root: PathBuf) -> Self {
        let mut binaries = Vec::with_capacity(BinaryName::ALL.len());
        for binary in BinaryName::ALL {
            let request = ResolutionRequest::new(binary).with_project_root(project_root.clone());
            binaries.push((binary, resolver.resolve(&request).await));
        }

        let resolved = |wanted: BinaryName| {
            binaries
                .iter()
                .find(|(binary, _)| *binary == wanted)
                .and_then(|(_, path)| path.as_deref())
        };
        let monorepo_root = resolved(BinaryName::Rescript)
            .or_else(|| resolved(BinaryName::Bsc))
            .and_then(monorepo_root);

        Self {
            project_root,
            host: resolver.host().clone(),
            binaries,
            monorepo_root,
        }
    }
}

impl fmt::Display for BinaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "project_root = {}", self.project_root.display())?;
        writeln!(f, "host = {}", self.host)?;
        for (binary, path) in &self.binaries {
            match path {
                Some(path) => writeln!(f, "{binary} = {}", path.display())?,
                None => writeln!(f, "{binary} = <not found>")?,
            }
        }
        match &self.monorepo_root {
            Some(root) => write!(f, "monorepo_root = {}", root.display()),
            None => write!(f, "monorepo_root = <none>"),
        }
    }
}

/// Execute the paths command.
pub async fn execute(resolver: &BinaryResolver, project_root: PathBuf) -> Result<()> {
    let report = BinaryReport::collect(resolver, project_root).await;
    println!("{report}");
    Ok(())
}
