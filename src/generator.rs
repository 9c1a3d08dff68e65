use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::excuse::{sentence, sentence_from, Vocabulary};
use crate::grammar::Node;
use crate::parser::load_vocabulary;
use crate::utils::Result;
use crate::writer::Writer;

/// Configuration options for excuse generation
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; entropy is used when unset
    pub seed: Option<u64>,
    /// Built-in excuse set
    pub vocabulary: Vocabulary,
    /// File of causes replacing the built-in ones
    pub causes_file: Option<PathBuf>,
}

/// Expands an excuse grammar into normalized sentences
#[derive(Debug, Clone)]
pub struct Generator {
    root: Node,
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator over the classic grammar
    pub fn new() -> Self {
        Generator {
            root: sentence(),
            config: GeneratorConfig::default(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        let cause = match &config.causes_file {
            Some(path) => load_vocabulary(path)?,
            None => config.vocabulary.cause()?,
        };
        let root = sentence_from(config.vocabulary.statement(), cause);
        info!(
            vocabulary = ?config.vocabulary,
            causes_file = ?config.causes_file,
            outcomes = root.count(),
            "grammar ready"
        );
        Ok(Generator { root, config })
    }

    /// Create a generator over an arbitrary grammar
    pub fn from_root(root: Node) -> Self {
        Generator {
            root,
            config: GeneratorConfig::default(),
        }
    }

    /// The grammar being expanded
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A fresh random source, seeded from the configured seed or from system entropy
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => {
                debug!(seed, "seeding from configured seed");
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("seeding from system entropy");
                StdRng::from_entropy()
            }
        }
    }

    /// Generate one excuse with the given random source.
    ///
    /// The rendered line gets its first letter upper-cased.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut out = Writer::new();
        self.root.expand(&mut out, rng);
        debug!(tokens = out.tokens().len(), "expanded");
        capitalize(&out.render())
    }

    /// Generate one excuse from a freshly seeded source
    pub fn generate(&self) -> String {
        let mut rng = self.rng();
        self.generate_with(&mut rng)
    }

    /// Generate `count` excuses drawn from a single seeded source
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        let mut rng = self.rng();
        (0..count).map(|_| self.generate_with(&mut rng)).collect()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
