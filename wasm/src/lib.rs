use genomeview_layout::{ArrowStyle, Scene, resolve_label_visibility};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelOptions {
    /// Settings-panel arrow style code; overrides the scene's own style.
    arrow_style: Option<u8>,
}

fn scene_arrow_style(scene: &Scene, options: &LabelOptions) -> Result<ArrowStyle, String> {
    match options.arrow_style {
        Some(code) => {
            ArrowStyle::from_code(code).ok_or_else(|| format!("unknown arrow style code {code}"))
        }
        None => Ok(scene.arrow_style.unwrap_or_default()),
    }
}

fn resolve_scene(scene_json: &str, options: LabelOptions) -> Result<Vec<bool>, String> {
    let scene: Scene = serde_json::from_str(scene_json).map_err(|error| error.to_string())?;
    let style = scene_arrow_style(&scene, &options)?;
    resolve_label_visibility(&scene.labels, &scene.glyphs, style).map_err(|error| error.to_string())
}

/// Visibility flags for the labels of a scene, as a JSON array of booleans.
#[wasm_bindgen]
pub fn resolve_gene_labels(scene_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<LabelOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        LabelOptions::default()
    };

    let visible = resolve_scene(scene_json, options).map_err(|error| JsValue::from_str(&error))?;
    serde_json::to_string(&visible).map_err(|error| JsValue::from_str(&error.to_string()))
}
