//! LCIA method container: owns the CFs, runs populate → synthesize, exports.

use archetype_core::config::{ArchetypeConfig, SynthesisConfig, SynthesisVariant};
use archetype_core::errors::{ArchetypeResult, ConfigError, InputError};
use archetype_core::traits::{FlowDirectory, MethodSource};
use archetype_core::{CfPayload, CharacterisationFactor, ContextResolver, FlowKey, RawCfValue};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hierarchy::{self, HierarchyIndex};
use crate::synthesis::{self, FrequencyWeighting};

/// Ordered collection of the CFs of one LCIA method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LciaMethod {
    cfs: Vec<CharacterisationFactor>,
}

impl LciaMethod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_factors(cfs: Vec<CharacterisationFactor>) -> Self {
        Self { cfs }
    }

    /// Build and synthesize a method in one call, using the configured variant
    /// with uniform sibling frequencies.
    pub fn transform(
        source: &dyn MethodSource,
        flows: &dyn FlowDirectory,
        config: &ArchetypeConfig,
    ) -> ArchetypeResult<Self> {
        Self::transform_with_weighting(source, flows, config, &FrequencyWeighting::Uniform)
    }

    /// Like [`Self::transform`], with explicit sibling weighting for the
    /// weighted variant. The immediate variant ignores `weighting`.
    pub fn transform_with_weighting(
        source: &dyn MethodSource,
        flows: &dyn FlowDirectory,
        config: &ArchetypeConfig,
        weighting: &FrequencyWeighting,
    ) -> ArchetypeResult<Self> {
        let span = archetype_core::transform_span!(0usize);
        let _guard = span.enter();

        let resolver = ContextResolver::from_config(&config.context);
        let mut method = Self::new();
        method.populate(source, flows, &resolver)?;
        span.record("cf_count", method.len());

        match config.synthesis.effective_variant() {
            SynthesisVariant::ImmediateChildren => {
                method.synthesize_immediate(&config.synthesis);
            }
            SynthesisVariant::WeightedDescendants => {
                method.synthesize_weighted(&config.synthesis, weighting)?;
            }
        }
        Ok(method)
    }

    /// Characterise every record of `source` and append the CFs.
    ///
    /// Fails on the first structured value or unknown flow; the container
    /// is left untouched in that case. Returns the number of CFs added.
    pub fn populate(
        &mut self,
        source: &dyn MethodSource,
        flows: &dyn FlowDirectory,
        resolver: &ContextResolver,
    ) -> ArchetypeResult<usize> {
        let records = source.load()?;
        let mut built = Vec::with_capacity(records.len());

        for (key, raw) in records {
            let value = match raw {
                RawCfValue::Plain(value) => value,
                RawCfValue::Structured(value) => {
                    return Err(InputError::UnsupportedInput {
                        key,
                        value: value.to_string(),
                    }
                    .into());
                }
            };
            let record = flows
                .get_activity(&key)
                .ok_or_else(|| InputError::MissingFlowMetadata { key: key.clone() })?;
            let context = resolver.normalize(&record.categories)?;
            built.push(CharacterisationFactor::new(key, &record, context, value));
        }

        let added = built.len();
        self.cfs.extend(built);
        info!(added, total = self.cfs.len(), "populated method");
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.cfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cfs.is_empty()
    }

    pub fn factors(&self) -> &[CharacterisationFactor] {
        &self.cfs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterisationFactor> {
        self.cfs.iter()
    }

    pub fn get(&self, key: &FlowKey) -> Option<&CharacterisationFactor> {
        self.cfs.iter().find(|cf| &cf.key == key)
    }

    /// Depth of the deepest context in the method.
    pub fn max_level(&self) -> Option<usize> {
        self.cfs.iter().map(CharacterisationFactor::level).max()
    }

    pub fn children_of(&self, cf: &CharacterisationFactor) -> Vec<&CharacterisationFactor> {
        hierarchy::children_of(&self.cfs, cf)
    }

    pub fn descendants_of(&self, cf: &CharacterisationFactor) -> Vec<&CharacterisationFactor> {
        hierarchy::descendants_of(&self.cfs, cf)
    }

    pub fn hierarchy_index(&self) -> HierarchyIndex {
        HierarchyIndex::build(&self.cfs)
    }

    /// Immediate-children synthesis. Returns the number of CFs synthesized.
    pub fn synthesize_immediate(&mut self, config: &SynthesisConfig) -> usize {
        synthesis::synthesize_immediate(&mut self.cfs, config)
    }

    pub fn aggregate_possible_values(&mut self, weighting: &FrequencyWeighting) -> usize {
        synthesis::aggregate_possible_values(&mut self.cfs, weighting)
    }

    pub fn synthesize_from_possible_values(
        &mut self,
        config: &SynthesisConfig,
    ) -> ArchetypeResult<usize> {
        Ok(synthesis::synthesize_from_possible_values(&mut self.cfs, config)?)
    }

    /// Weighted aggregation followed by moment synthesis.
    pub fn synthesize_weighted(
        &mut self,
        config: &SynthesisConfig,
        weighting: &FrequencyWeighting,
    ) -> ArchetypeResult<usize> {
        Ok(synthesis::synthesize_weighted(&mut self.cfs, config, weighting)?)
    }

    /// Overwrite the distribution-family code of every uncertain CF.
    /// Deterministic CFs are left alone. Returns the number updated.
    pub fn set_uncertainty_type(&mut self, code: i64) -> usize {
        let mut updated = 0;
        for params in self.cfs.iter_mut().filter_map(|cf| cf.uncertainty_param.as_mut()) {
            params.uncertainty_type = code;
            updated += 1;
        }
        info!(code, updated, "set uncertainty type");
        updated
    }

    /// [`Self::set_uncertainty_type`] for a dynamically typed code, e.g. one
    /// read from JSON. Anything but an integer is rejected.
    pub fn set_uncertainty_type_value(
        &mut self,
        code: &serde_json::Value,
    ) -> Result<usize, ConfigError> {
        let code = code.as_i64().ok_or_else(|| ConfigError::InvalidConfiguration {
            field: "uncertainty type".to_string(),
            message: format!("must be an integer, got {code}"),
        })?;
        Ok(self.set_uncertainty_type(code))
    }

    /// `(identity, payload)` for every CF, in container order.
    pub fn to_pairs(&self) -> Vec<(FlowKey, CfPayload)> {
        self.cfs
            .iter()
            .map(|cf| (cf.key.clone(), cf.payload()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a LciaMethod {
    type Item = &'a CharacterisationFactor;
    type IntoIter = std::slice::Iter<'a, CharacterisationFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cfs.iter()
    }
}
