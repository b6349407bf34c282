#![cfg(target_arch = "wasm32")]

use frontend::config::{current_port, Config};
use frontend::GlobalRef;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn config_matches_window_port() {
    let from_window = Config::from_window();
    let from_port = Config::for_location_port(current_port());
    assert_eq!(from_window, from_port);
}

#[wasm_bindgen_test]
fn global_ref_services_use_deployed_host() {
    let global = GlobalRef::new();
    assert_eq!(
        global.log_in_path(),
        "http://moxie.cs.oswego.edu:30500/reel-rating-auth-service/auth/login"
    );
    assert_eq!(
        global.search_base(),
        "http://moxie.cs.oswego.edu:30505/reel-rating-search-service"
    );
}

#[wasm_bindgen_test]
fn global_ref_patterns_work_as_regexp() {
    let global = GlobalRef::new();
    assert!(global.reg_ex_spec_char().test("#"));
    assert!(!global.reg_ex_spec_char().test("a"));
    assert!(global.reg_ex_num().test("5"));
    assert!(!global.reg_ex_num().test("a"));
    assert!(global.reg_ex_email().test("user@example.com"));
    assert!(!global.reg_ex_email().test("not-an-email"));
}

#[wasm_bindgen_test]
fn global_ref_endpoints_object() {
    let global = GlobalRef::new();
    let endpoints = global.endpoints().unwrap();
    let home = js_sys::Reflect::get(&endpoints, &"homeLocation".into()).unwrap();
    assert_eq!(home.as_string(), Some(global.home_location()));
}

mod provider {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use frontend::{use_app_config, ConfigProvider};
    use shared::{AppConfig, Deployment};
    use wasm_bindgen_test::*;
    use yew::prelude::*;

    thread_local! {
        static SEEN: RefCell<Vec<Rc<AppConfig>>> = RefCell::new(Vec::new());
    }

    #[function_component(Reader)]
    fn reader() -> Html {
        let config = use_app_config();
        SEEN.with(|seen| seen.borrow_mut().push(config));
        html! {}
    }

    #[function_component(Harness)]
    fn harness() -> Html {
        let preset = Rc::new(AppConfig::for_port(Some("30400")));
        html! {
            <ConfigProvider config={Some(preset)}>
                <Reader />
                <Reader />
            </ConfigProvider>
        }
    }

    #[wasm_bindgen_test]
    async fn consumers_share_the_provided_config() {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.create_element("div").ok())
            .unwrap();
        yew::Renderer::<Harness>::with_root(root).render();
        yew::platform::time::sleep(Duration::from_millis(50)).await;

        SEEN.with(|seen| {
            let seen = seen.borrow();
            assert!(seen.len() >= 2);
            // the test runner never serves on the GUI port, so this is the preset
            assert!(seen.iter().all(|config| config.deployment() == Deployment::Deployed));
            assert!(seen.iter().all(|config| Rc::ptr_eq(config, &seen[0])));
        });
    }
}
