use minic::Error;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// Driver settings, optionally read from a YAML file.
///
/// ```yaml
/// out_dir: build
/// echo: false
/// artifacts:
///   tac: main.tac
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub out_dir: String,
    pub echo: bool,
    pub yaml: bool,
    pub artifacts: Artifacts,
}

/// File names written into `out_dir`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifacts {
    pub tokens: String,
    pub symtab: String,
    pub tac: String,
    pub asm: String,
    pub symtab_yaml: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: "out".to_string(),
            echo: true,
            yaml: false,
            artifacts: Artifacts::default(),
        }
    }
}

impl Default for Artifacts {
    fn default() -> Self {
        Self {
            tokens: "tokens.txt".to_string(),
            symtab: "symtab.txt".to_string(),
            tac: "ir.tac".to_string(),
            asm: "assembly.txt".to_string(),
            symtab_yaml: "symtab.yaml".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self, Error> {
        match path {
            Some(path) => {
                let file = File::open(path)?;
                Ok(serde_yaml::from_reader(BufReader::new(file))?)
            }
            None => Ok(Self::default()),
        }
    }
}
