//! JavaScript surface for page scripts that are not Yew components.

use gloo_utils::format::JsValueSerdeExt;
use js_sys::RegExp;
use shared::{validation, AppConfig};
use wasm_bindgen::prelude::*;

use crate::config::Config;

/// Read-only view of the app configuration, constructed from the current page.
#[wasm_bindgen]
pub struct GlobalRef {
    config: AppConfig,
}

#[wasm_bindgen]
impl GlobalRef {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GlobalRef {
        GlobalRef {
            config: Config::from_window(),
        }
    }

    #[wasm_bindgen(getter = homeLocation)]
    pub fn home_location(&self) -> String {
        self.config.home_location().to_string()
    }

    #[wasm_bindgen(getter = indexLocation)]
    pub fn index_location(&self) -> String {
        self.config.index_location().to_string()
    }

    #[wasm_bindgen(getter = logInPath)]
    pub fn log_in_path(&self) -> String {
        self.config.log_in_path().to_string()
    }

    #[wasm_bindgen(getter = regPath)]
    pub fn reg_path(&self) -> String {
        self.config.reg_path().to_string()
    }

    #[wasm_bindgen(getter = movieDataBase)]
    pub fn movie_data_base(&self) -> String {
        self.config.movie_data_base().to_string()
    }

    #[wasm_bindgen(getter = movieImgBase)]
    pub fn movie_img_base(&self) -> String {
        self.config.movie_img_base().to_string()
    }

    #[wasm_bindgen(getter = reviewBase)]
    pub fn review_base(&self) -> String {
        self.config.review_base().to_string()
    }

    #[wasm_bindgen(getter = ratingsBase)]
    pub fn ratings_base(&self) -> String {
        self.config.ratings_base().to_string()
    }

    #[wasm_bindgen(getter = actorBase)]
    pub fn actor_base(&self) -> String {
        self.config.actor_base().to_string()
    }

    #[wasm_bindgen(getter = searchBase)]
    pub fn search_base(&self) -> String {
        self.config.search_base().to_string()
    }

    // The pattern sources only use syntax RegExp and the regex crate share.
    #[wasm_bindgen(getter = regExSpecChar)]
    pub fn reg_ex_spec_char(&self) -> RegExp {
        RegExp::new(self.config.patterns().special_char().as_str(), "")
    }

    #[wasm_bindgen(getter = regExNum)]
    pub fn reg_ex_num(&self) -> RegExp {
        RegExp::new(self.config.patterns().digit().as_str(), "")
    }

    #[wasm_bindgen(getter = regExEmail)]
    pub fn reg_ex_email(&self) -> RegExp {
        RegExp::new(self.config.patterns().email().as_str(), "")
    }

    /// All URL fields as a plain object.
    pub fn endpoints(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.config.endpoints())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize endpoints: {}", e)))
    }
}

impl Default for GlobalRef {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(value: &str) -> bool {
    validation::looks_like_email(value)
}

#[wasm_bindgen(js_name = hasSpecialChar)]
pub fn has_special_char(value: &str) -> bool {
    validation::has_special_char(value)
}

#[wasm_bindgen(js_name = hasDigit)]
pub fn has_digit(value: &str) -> bool {
    validation::has_digit(value)
}
