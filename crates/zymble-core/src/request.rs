//! Per-invocation generation requests

use crate::error::{Result, ScaffoldError};
use crate::project::LanguageVariant;

/// Options for a component request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentOptions {
    /// Generate a props type and destructure props in the body
    pub has_props: bool,
}

/// Options for a hook request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookOptions {
    /// Initialize a piece of state
    pub has_state: bool,
    /// Register an effect
    pub has_effect: bool,
}

/// An immutable request to generate one entity's files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest<O> {
    name: String,
    options: O,
    variant: LanguageVariant,
}

pub type ComponentRequest = GenerationRequest<ComponentOptions>;
pub type HookRequest = GenerationRequest<HookOptions>;

impl<O: Copy> GenerationRequest<O> {
    /// Build a request for an already-normalized name
    pub fn new(name: impl Into<String>, options: O, variant: LanguageVariant) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScaffoldError::empty_input("Name"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScaffoldError::InvalidName { name });
        }
        Ok(Self {
            name,
            options,
            variant,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> O {
        self.options
    }

    pub fn variant(&self) -> LanguageVariant {
        self.variant
    }
}
