//! JSON documents for linear systems; numbers are rational strings (`"-1/2"`).

use anyhow::{Context, Result};
use num_rational::BigRational;
use polyproj::{LinForm, LinearSystem, Relation, Ring};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `coeffs · x + constant`, compared against zero by the list it sits in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowDoc {
    pub coeffs: Vec<String>,
    pub constant: String,
}

/// `coeffs · x + constant <op> 0` with `op` one of `< > = <= >=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDoc {
    pub coeffs: Vec<String>,
    pub constant: String,
    pub op: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemDoc {
    pub variables: Vec<String>,
    #[serde(default)]
    pub eq: Vec<RowDoc>,
    #[serde(default)]
    pub lt: Vec<RowDoc>,
    #[serde(default)]
    pub le: Vec<RowDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<ConstraintDoc>,
}

pub fn parse_rational(s: &str) -> Result<BigRational> {
    s.trim()
        .parse::<BigRational>()
        .with_context(|| format!("not a rational number: {s:?}"))
}

fn parse_row(coeffs: &[String], constant: &str) -> Result<(Vec<BigRational>, BigRational)> {
    let a = coeffs
        .iter()
        .map(|c| parse_rational(c))
        .collect::<Result<Vec<_>>>()?;
    Ok((a, parse_rational(constant)?))
}

impl SystemDoc {
    pub fn to_system(&self) -> Result<LinearSystem<BigRational>> {
        let ring = Ring::new(&self.variables).context("variable list")?;
        let mut sys = LinearSystem::universe(ring);
        let lists = [
            ("eq", Relation::Eq, &self.eq),
            ("lt", Relation::Lt, &self.lt),
            ("le", Relation::Le, &self.le),
        ];
        for (label, rel, rows) in lists {
            for (i, row) in rows.iter().enumerate() {
                let (a, c) = parse_row(&row.coeffs, &row.constant)
                    .with_context(|| format!("{label} row {i}"))?;
                sys.add_linear_constraint(&a, c, rel)
                    .with_context(|| format!("{label} row {i}"))?;
            }
        }
        for (i, con) in self.constraints.iter().enumerate() {
            let rel: Relation = con
                .op
                .parse()
                .with_context(|| format!("constraint {i}"))?;
            let (a, c) = parse_row(&con.coeffs, &con.constant)?;
            sys.add_linear_constraint(&a, c, rel)
                .with_context(|| format!("constraint {i}"))?;
        }
        Ok(sys)
    }

    pub fn from_system(sys: &LinearSystem<BigRational>) -> Self {
        let rows = |forms: &std::collections::BTreeSet<LinForm<BigRational>>| {
            forms
                .iter()
                .map(|f| RowDoc {
                    coeffs: f.coeffs.iter().map(|a| a.to_string()).collect(),
                    constant: f.constant.to_string(),
                })
                .collect()
        };
        Self {
            variables: sys.ring().names().to_vec(),
            eq: rows(sys.eq_forms()),
            lt: rows(sys.lt_forms()),
            le: rows(sys.le_forms()),
            constraints: Vec::new(),
        }
    }
}

pub fn read_system(path: &Path) -> Result<SystemDoc> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
