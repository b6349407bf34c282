use std::rc::Rc;

use log::debug;
use shared::AppConfig;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfigProviderProps {
    #[prop_or_default]
    pub children: Children,

    /// Use this configuration instead of reading the page port.
    #[prop_or_default]
    pub config: Option<Rc<AppConfig>>,
}

/// Builds the app configuration once and hands it to every descendant.
#[function_component(ConfigProvider)]
pub fn config_provider(props: &ConfigProviderProps) -> Html {
    let preset = props.config.clone();
    let config = use_memo((), move |_| match preset {
        Some(config) => (*config).clone(),
        None => Config::from_window(),
    });

    debug!("ConfigProvider rendering ({:?})", config.deployment());

    html! {
        <ContextProvider<Rc<AppConfig>> context={config}>
            {props.children.clone()}
        </ContextProvider<Rc<AppConfig>>>
    }
}

/// The configuration provided by the nearest `ConfigProvider`.
///
/// Panics when called outside a `ConfigProvider`.
#[hook]
pub fn use_app_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().expect("Config context not found")
}
