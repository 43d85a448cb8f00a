//! Cell file loading and hierarchical dependency resolution.
//!
//! `load_file` reads a root cell plus, recursively, every cell it depends
//! on, and produces a [`Netlist`] whose definitions are in dependency
//! order: dependencies first, the root cell last. Shared dependencies are
//! emitted once; cycles fail before any IR is produced.

use std::path::{Path, PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use spicewright_ir::{Netlist, SubcktDef};
use tracing::debug;

use crate::builder::build_subckt_def;
use crate::error::{FrontendError, FrontendResult};
use crate::schema::{Cell, CellFile};

/// Load a YAML or JSON topology file and every dependency it declares.
///
/// The returned netlist's `top_cell` is the root file's cell, and its
/// definition is the last element of `subckt_defs`.
pub fn load_file(path: impl AsRef<Path>) -> FrontendResult<Netlist> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading cell hierarchy");

    let root = canonicalize(path)?;
    let mut resolver = DepResolver::default();
    let subckt_defs = resolver.visit(&root)?;

    let top_cell = subckt_defs.last().map(|d| d.name.clone());
    debug!(
        defs = subckt_defs.len(),
        top = top_cell.as_deref().unwrap_or(""),
        "cell hierarchy resolved"
    );
    Ok(Netlist {
        subckt_defs,
        top_cell,
        pdk_includes: vec![],
    })
}

/// Depth-first traversal state over the dependency graph.
///
/// `memo` caches the ordered definition list each location contributes, so
/// a diamond dependency is loaded once. `in_progress` holds locations on
/// the current DFS path for cycle detection. Recursion depth is bounded by
/// the number of distinct files: a location is marked in-progress before
/// any of its dependencies are visited.
#[derive(Default)]
struct DepResolver {
    memo: FxHashMap<PathBuf, Vec<SubcktDef>>,
    in_progress: FxHashSet<PathBuf>,
}

impl DepResolver {
    /// Visit one canonicalized location and return the definitions it and
    /// its dependencies contribute, dependencies first, itself last.
    fn visit(&mut self, location: &Path) -> FrontendResult<Vec<SubcktDef>> {
        if let Some(defs) = self.memo.get(location) {
            return Ok(defs.clone());
        }
        if !self.in_progress.insert(location.to_path_buf()) {
            return Err(FrontendError::CircularDependency {
                path: location.to_path_buf(),
            });
        }

        let cell = read_cell(location)?;
        let base = location.parent().unwrap_or_else(|| Path::new("."));

        let mut defs: Vec<SubcktDef> = vec![];
        for declared in &cell.deps {
            let resolved = base.join(declared);
            if !resolved.exists() {
                return Err(FrontendError::DependencyNotFound {
                    declared: declared.clone(),
                    resolved,
                    declared_by: location.to_path_buf(),
                });
            }
            let dep = canonicalize(&resolved)?;
            for def in self.visit(&dep)? {
                // One canonical copy per name, first-seen order.
                if !defs.iter().any(|d| d.name == def.name) {
                    defs.push(def);
                }
            }
        }
        defs.push(build_subckt_def(&cell)?);

        self.in_progress.remove(location);
        self.memo.insert(location.to_path_buf(), defs.clone());
        Ok(defs)
    }
}

/// Read, parse, and validate a single cell file, dispatching on extension.
fn read_cell(path: &Path) -> FrontendResult<Cell> {
    let text = std::fs::read_to_string(path).map_err(|source| FrontendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let file: CellFile = match extension.as_str() {
        "yaml" | "yml" => {
            serde_yaml_ng::from_str(&text).map_err(|source| FrontendError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        "json" => serde_json::from_str(&text).map_err(|source| FrontendError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => {
            return Err(FrontendError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension,
            });
        }
    };
    file.cell.validate()?;
    Ok(file.cell)
}

fn canonicalize(path: &Path) -> FrontendResult<PathBuf> {
    path.canonicalize().map_err(|source| FrontendError::Io {
        path: path.to_path_buf(),
        source,
    })
}
