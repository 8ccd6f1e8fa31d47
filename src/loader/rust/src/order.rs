/* src/loader/rust/src/order.rs */

//! Activation order for manifests that declare `after` dependencies.

use std::collections::{BTreeSet, HashMap};

use crate::errors::{LoaderError, Result};
use crate::manifest::ModuleEntry;

/// Stable topological order of `entries`, as indices into the slice.
///
/// Kahn's algorithm with the ready set keyed by manifest position: among the
/// modules whose dependencies are satisfied, the one listed first goes next.
/// A manifest without dependencies therefore keeps its written order.
pub(crate) fn stable_topo_order(entries: &[ModuleEntry]) -> Result<Vec<usize>> {
  let mut position: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
  for (i, entry) in entries.iter().enumerate() {
    if position.insert(entry.name.as_str(), i).is_some() {
      return Err(LoaderError::DuplicateModule(entry.name.to_string()));
    }
  }

  let mut indegree = vec![0usize; entries.len()];
  let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
  for (i, entry) in entries.iter().enumerate() {
    for dep in &entry.after {
      let Some(&d) = position.get(dep.as_str()) else {
        return Err(LoaderError::UnknownDependency {
          module: entry.name.to_string(),
          dependency: dep.to_string(),
        });
      };
      indegree[i] += 1;
      dependents[d].push(i);
    }
  }

  let mut ready: BTreeSet<usize> =
    indegree.iter().enumerate().filter(|(_, d)| **d == 0).map(|(i, _)| i).collect();
  let mut order = Vec::with_capacity(entries.len());
  while let Some(i) = ready.pop_first() {
    order.push(i);
    for &j in &dependents[i] {
      indegree[j] -= 1;
      if indegree[j] == 0 {
        ready.insert(j);
      }
    }
  }

  if order.len() != entries.len() {
    // Everything still waiting is on a cycle or behind one
    let modules = indegree
      .iter()
      .zip(entries)
      .filter(|(d, _)| **d > 0)
      .map(|(_, e)| e.name.to_string())
      .collect();
    return Err(LoaderError::DependencyCycle { modules });
  }

  Ok(order)
}
