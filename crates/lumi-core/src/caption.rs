// File: crates/lumi-core/src/caption.rs
// Summary: Read-only run-period -> caption table with literal fallback.

use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;

/// Caption text plus the relative scale it is drawn at.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: String,
    pub scale: f32,
}

impl Caption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), scale: 1.0 }
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Immutable key -> caption map; populated once at construction.
#[derive(Clone, Debug, Default)]
pub struct CaptionTable {
    entries: HashMap<String, Caption>,
}

impl CaptionTable {
    /// Empty table: every lookup falls back to the literal key.
    pub fn empty() -> Self { Self::default() }

    /// Build from `(key, caption text)` pairs; later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_captions(pairs.into_iter().map(|(k, v)| (k, Caption::new(v))))
    }

    /// Build from `(key, Caption)` pairs; later duplicates win.
    pub fn from_captions<K, I>(captions: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Caption)>,
    {
        let entries = captions.into_iter().map(|(k, c)| (k.into(), c)).collect();
        Self { entries }
    }

    /// Run periods of the LHC Run 1 / early Run 2 luminosity labels.
    pub fn run_periods() -> Self {
        let lumi_13 = "3.3 fb\u{207b}\u{00b9} (13 TeV)";
        let lumi_8 = "19.7 fb\u{207b}\u{00b9} (8 TeV)";
        let lumi_7 = "5.1 fb\u{207b}\u{00b9} (7 TeV)";
        Self::from_captions([
            ("13TeV", Caption::new(lumi_13)),
            ("13TeV_4T", Caption::new("2.7 fb\u{207b}\u{00b9} (13 TeV)")),
            ("13TeV_0T", Caption::new("0.6 fb\u{207b}\u{00b9} (13 TeV, 0T)")),
            ("8TeV", Caption::new(lumi_8)),
            ("7TeV", Caption::new(lumi_7)),
            ("Comb_7_8", Caption::new(format!("{lumi_7} + {lumi_8}"))),
            ("Comb_7_8_13", Caption::new(format!("{lumi_7} + {lumi_8} + {lumi_13}")).scaled(0.85)),
        ])
    }

    /// Return a new table with `other`'s entries layered over this one.
    pub fn merged(&self, other: &CaptionTable) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }

    /// Mapped caption, or `key` itself at unit scale when absent.
    pub fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, Caption> {
        match self.entries.get(key) {
            Some(c) => Cow::Borrowed(c),
            None => {
                debug!("caption table: no entry for {key:?}, using it literally");
                Cow::Owned(Caption::new(key))
            }
        }
    }

    /// Caption text for `key`, falling back to `key`.
    pub fn lookup_text<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(|c| c.text.as_str()).unwrap_or(key)
    }

    pub fn contains(&self, key: &str) -> bool { self.entries.contains_key(key) }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
