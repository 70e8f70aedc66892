//! Farm directory loading.
//!
//! A farm directory contains:
//!
//! | file            | required | content                                  |
//! |-----------------|----------|------------------------------------------|
//! | `crops.*`       | yes      | list of [`CropData`]                     |
//! | `plantings.*`   | yes      | list of [`PlantingData`], by crop name   |
//! | `environment.*` | no       | factor -> active level                   |
//! | `model.*`       | no       | [`ModelData`] (factor combination)       |
//!
//! Each file may be RON, TOML, or JSON.

use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use harvest_core::{
    CropDefinition, CropEntry, EconomicsError, EnvironmentFactors, FarmReport, YieldModel,
};

use crate::loader::{
    DataLoadError, check_duplicate, deserialize_file, deserialize_list, find_data_file,
    require_data_file, resolve_name,
};
use crate::schema::{CropData, EnvironmentData, ModelData, PlantingData};

/// A loaded and resolved farm scenario.
#[derive(Debug, Clone, Default)]
pub struct FarmData {
    crops: HashMap<String, CropDefinition>,
    entries: Vec<CropEntry>,
    environment: Option<EnvironmentFactors>,
    model: YieldModel,
}

impl FarmData {
    /// Resolve already-parsed data. `source` names the origin in errors.
    pub fn from_parts(
        crops: Vec<CropData>,
        plantings: Vec<PlantingData>,
        environment: Option<EnvironmentData>,
        model: Option<ModelData>,
        source: &Path,
    ) -> Result<Self, DataLoadError> {
        Self::resolve((crops, source), (plantings, source), environment, model)
    }

    fn resolve(
        (crops, crops_file): (Vec<CropData>, &Path),
        (plantings, plantings_file): (Vec<PlantingData>, &Path),
        environment: Option<EnvironmentData>,
        model: Option<ModelData>,
    ) -> Result<Self, DataLoadError> {
        let mut catalog = HashMap::with_capacity(crops.len());
        for crop in crops {
            check_duplicate(&catalog, &crop.name, crops_file)?;
            catalog.insert(crop.name.clone(), crop.into_definition());
        }

        let entries = plantings
            .into_iter()
            .map(|p| {
                let crop = resolve_name(&catalog, &p.crop, plantings_file, "crop")?;
                Ok(CropEntry::new(crop.clone(), p.num_crops))
            })
            .collect::<Result<Vec<_>, DataLoadError>>()?;

        Ok(Self {
            crops: catalog,
            entries,
            environment: environment.map(|env| env.into_iter().collect()),
            model: model.map(YieldModel::from).unwrap_or_default(),
        })
    }

    /// Crop definition by name.
    pub fn crop(&self, name: &str) -> Option<&CropDefinition> {
        self.crops.get(name)
    }

    pub fn crop_count(&self) -> usize {
        self.crops.len()
    }

    /// Planting entries in file order.
    pub fn entries(&self) -> &[CropEntry] {
        &self.entries
    }

    pub fn environment(&self) -> Option<&EnvironmentFactors> {
        self.environment.as_ref()
    }

    pub fn model(&self) -> YieldModel {
        self.model
    }

    pub fn total_yield(&self) -> f64 {
        self.model.total_yield(&self.entries, self.environment())
    }

    pub fn total_profit(&self) -> Result<f64, EconomicsError> {
        self.model.total_profit(&self.entries, self.environment())
    }

    /// Full per-entry breakdown under the farm's environment and model.
    pub fn report(&self) -> Result<FarmReport, EconomicsError> {
        self.model.report(&self.entries, self.environment())
    }
}

/// Load a farm directory. See the module docs for the expected files.
pub fn load_farm(dir: &Path) -> Result<FarmData, DataLoadError> {
    let crops_path = require_data_file(dir, "crops")?;
    let crops: Vec<CropData> = deserialize_list(&crops_path, "crops")?;

    let plantings_path = require_data_file(dir, "plantings")?;
    let plantings: Vec<PlantingData> = deserialize_list(&plantings_path, "plantings")?;

    let environment: Option<EnvironmentData> = find_data_file(dir, "environment")?
        .map(|path| deserialize_file(&path))
        .transpose()?;

    let model: Option<ModelData> = find_data_file(dir, "model")?
        .map(|path| deserialize_file(&path))
        .transpose()?;

    let farm = FarmData::resolve(
        (crops, &crops_path),
        (plantings, &plantings_path),
        environment,
        model,
    )?;
    info!(
        dir = %dir.display(),
        crops = farm.crop_count(),
        plantings = farm.entries().len(),
        "loaded farm"
    );
    Ok(farm)
}
