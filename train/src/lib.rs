use ::core::str::FromStr;
use ::std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use langrank::{trigram_profile, ModelsStorage, ModelsStorageError, Script};
use thiserror::Error;

/// Trigrams kept per language
pub const MODEL_TRIGRAMS: usize = 300;

/// `script -> language -> "tri|tri|..."`, same layout as `data/trigrams.json`
pub type FileModels = BTreeMap<String, BTreeMap<String, String>>;

/// Trigram list of the text, most frequent first, joined by `|`
pub fn create_model(text: &str) -> String {
    let trigrams: Vec<_> = trigram_profile(text)
        .into_iter()
        .take(MODEL_TRIGRAMS)
        .map(|(trigram, _)| trigram)
        .collect();
    trigrams.join("|")
}

/// Reads `<inp>/<Script>/<language>.txt` files and creates a model for each
pub fn create_models(inp: &Path) -> Result<FileModels, TrainError> {
    let mut models = FileModels::new();

    for script_dir in fs::read_dir(inp).map_err(|e| TrainError::Read(inp.into(), e))? {
        let script_path = script_dir.map_err(|e| TrainError::Read(inp.into(), e))?.path();
        if !script_path.is_dir() {
            continue;
        }
        let script_name = file_stem(&script_path)?;
        let script = Script::from_str(&script_name)
            .map_err(|_| TrainError::UnknownScript(script_name.clone()))?;
        if script.singleton_language().is_some() {
            tracing::info!("SKIP single language script {script:?}");
            continue;
        }

        let mut languages = BTreeMap::new();
        for file in fs::read_dir(&script_path).map_err(|e| TrainError::Read(script_path.clone(), e))? {
            let file_path = file.map_err(|e| TrainError::Read(script_path.clone(), e))?.path();
            if file_path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }
            let language = file_stem(&file_path)?;
            let text =
                fs::read_to_string(&file_path).map_err(|e| TrainError::Read(file_path.clone(), e))?;

            let model = create_model(&text);
            if model.is_empty() {
                return Err(TrainError::EmptyText(file_path));
            }
            tracing::info!("{script:?} {language} done");
            languages.insert(language, model);
        }

        if !languages.is_empty() {
            models.insert(script_name, languages);
        }
    }

    Ok(models)
}

/// Writes models as json, after checking they load
pub fn write_models(models: &FileModels, out: &Path) -> Result<(), TrainError> {
    let json = serde_json::to_string_pretty(models)?;
    let storage = ModelsStorage::from_json(&json)?;
    tracing::info!("Writing {} languages to {out:?}", storage.languages_count());

    fs::write(out, json + "\n").map_err(|e| TrainError::Write(out.into(), e))
}

fn file_stem(path: &Path) -> Result<String, TrainError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| TrainError::FileName(path.into()))
}

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Read {0:?} error")]
    Read(PathBuf, #[source] io::Error),
    #[error("Write {0:?} error")]
    Write(PathBuf, #[source] io::Error),
    #[error("Invalid file name {0:?}")]
    FileName(PathBuf),
    #[error("Unknown script {0:?}")]
    UnknownScript(String),
    #[error("No trigrams in {0:?}")]
    EmptyText(PathBuf),
    #[error("Json error")]
    Json(#[from] serde_json::Error),
    #[error("Models are not loadable")]
    Models(#[from] ModelsStorageError),
}
