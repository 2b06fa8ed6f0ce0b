use crate::error::BomError;
use std::fmt;
use std::str::FromStr;

/// A user-facing description of one part to add: `Door=800` or `Door/Window=120`.
///
/// The last path segment names the part itself; the segments before it name the
/// parent it hangs under, resolved against the assembly being built.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSpec {
    pub path: Vec<String>,
    pub unit_cost: f64,
}

impl PartSpec {
    pub fn new(path: &[&str], unit_cost: f64) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
            unit_cost,
        }
    }

    /// Name of the part being added.
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Path of the parent, empty for a top-level part.
    pub fn parent(&self) -> Vec<&str> {
        let parent_len = self.path.len().saturating_sub(1);
        self.path[..parent_len].iter().map(String::as_str).collect()
    }
}

impl fmt::Display for PartSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.path.join("/"), self.unit_cost)
    }
}

impl FromStr for PartSpec {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path_str, cost_str) = s.rsplit_once('=').ok_or_else(|| {
            BomError::Parse(format!("Invalid part '{}': expected NAME=COST", s))
        })?;

        let path: Vec<String> = path_str.split('/').map(|p| p.trim().to_string()).collect();
        if path.iter().any(|segment| segment.is_empty()) {
            return Err(BomError::Parse(format!(
                "Invalid part '{}': empty name in path",
                s
            )));
        }

        let unit_cost = cost_str.trim().parse::<f64>().map_err(|_| {
            BomError::Parse(format!(
                "Invalid part '{}': '{}' is not a number",
                s, cost_str
            ))
        })?;

        Ok(Self { path, unit_cost })
    }
}
