//! WebAssembly entry point and DOM bindings.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use swatchpad_core::{
    click_action, ClipboardSink, FragmentStore, HexColor, KeyResponse, PaletteConfig,
    PaletteController, SwatchView, TargetRole, TextColor,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Location, MouseEvent};

use crate::shortcuts::ShortcutRegistry;

/// Errors while mounting the page.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("No swatch containers match {0:?}")]
    NoSwatches(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(format!("{:?}", value))
    }
}

/// CSS selectors and classes of the page markup.
#[derive(Debug, Clone)]
pub struct DomSelectors {
    /// One container per swatch.
    pub swatch: String,
    /// Hex label inside a container.
    pub label: String,
    /// Lock toggle button inside a container.
    pub button: String,
    /// Lock icon inside the button.
    pub icon: String,
    pub locked_class: String,
    pub unlocked_class: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            swatch: ".col".to_string(),
            label: "h2".to_string(),
            button: "button".to_string(),
            icon: "i".to_string(),
            locked_class: "fa-lock".to_string(),
            unlocked_class: "fa-lock-open".to_string(),
        }
    }
}

/// A swatch container and the elements inside it.
pub struct DomSwatch {
    container: HtmlElement,
    label: Option<HtmlElement>,
    button: Option<HtmlElement>,
    icon: Option<Element>,
    locked_class: String,
    unlocked_class: String,
}

impl DomSwatch {
    fn from_container(container: Element, selectors: &DomSelectors) -> Result<Self, WebError> {
        let find = |selector: &str| -> Result<Option<Element>, WebError> {
            Ok(container.query_selector(selector)?)
        };
        let label = find(&selectors.label)?.and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let button = find(&selectors.button)?.and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let icon = find(&selectors.icon)?;
        let container = container
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::Js("Swatch container is not an HTML element".to_string()))?;

        Ok(Self {
            container,
            label,
            button,
            icon,
            locked_class: selectors.locked_class.clone(),
            unlocked_class: selectors.unlocked_class.clone(),
        })
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = element.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }
}

impl SwatchView for DomSwatch {
    fn displayed_color(&self) -> Option<HexColor> {
        let text = self.label.as_ref()?.text_content()?;
        HexColor::parse(text.trim()).ok()
    }

    fn is_locked(&self) -> bool {
        self.icon
            .as_ref()
            .is_some_and(|icon| icon.class_list().contains(&self.locked_class))
    }

    fn render(&mut self, color: HexColor, text_color: TextColor) {
        let hex = color.to_string();
        Self::set_style(&self.container, "background", &hex);
        if let Some(label) = &self.label {
            label.set_text_content(Some(&hex));
            Self::set_style(label, "color", text_color.css());
        }
        if let Some(button) = &self.button {
            Self::set_style(button, "color", text_color.css());
        }
    }

    fn set_locked(&mut self, locked: bool) {
        let Some(icon) = &self.icon else {
            return;
        };
        let classes = icon.class_list();
        let _ = classes.toggle_with_force(&self.locked_class, locked);
        let _ = classes.toggle_with_force(&self.unlocked_class, !locked);
    }
}

/// The page's location hash.
pub struct LocationFragment {
    location: Location,
}

impl FragmentStore for LocationFragment {
    fn read(&self) -> String {
        self.location.hash().unwrap_or_default()
    }

    fn write(&mut self, fragment: &str) {
        if let Err(e) = self.location.set_hash(fragment) {
            log::warn!("Failed to update location hash: {:?}", e);
        }
    }
}

/// Async Clipboard API, fire and forget.
pub struct WebClipboard;

impl ClipboardSink for WebClipboard {
    fn write_text(&mut self, text: &str) {
        let text = text.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let promise = clipboard.write_text(&text);
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("Failed to copy {} to clipboard: {:?}", text, e);
                }
            }
        });
    }
}

/// RNG seeded from `Math.random`.
fn seeded_rng() -> StdRng {
    let word = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    StdRng::seed_from_u64((word() << 32) | word())
}

type WebController = PaletteController<DomSwatch, LocationFragment, WebClipboard, StdRng>;

/// The mounted page: controller plus its two event listeners.
pub struct WebApp {
    _controller: Rc<RefCell<WebController>>,
    // Listeners stay registered for as long as these closures live
    _on_keydown: Closure<dyn Fn(KeyboardEvent)>,
    _on_click: Closure<dyn Fn(MouseEvent)>,
}

impl WebApp {
    /// Bind to the swatches in the current document, load the palette from
    /// the location hash and register the keydown and click listeners.
    pub fn mount(config: PaletteConfig, selectors: DomSelectors) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let nodes = document.query_selector_all(&selectors.swatch)?;
        let containers: Vec<Element> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        if containers.is_empty() {
            return Err(WebError::NoSwatches(selectors.swatch.clone()));
        }

        let views = containers
            .iter()
            .map(|container| DomSwatch::from_container(container.clone(), &selectors))
            .collect::<Result<Vec<_>, _>>()?;

        let config = config.with_swatch_count(views.len());
        let mut controller = PaletteController::new(
            config.clone(),
            views,
            LocationFragment {
                location: window.location(),
            },
            WebClipboard,
            seeded_rng(),
        );
        controller.initialize();
        let controller = Rc::new(RefCell::new(controller));

        // keydown: regenerate on the configured key, suppress every default
        let keydown_controller = controller.clone();
        let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let response = KeyResponse::for_key(&e.code(), &config);
            if response.prevent_default {
                e.prevent_default();
            }
            if let Some(action) = response.action {
                if let Err(err) = keydown_controller.borrow_mut().dispatch(action) {
                    log::warn!("{}", err);
                }
            }
        }) as Box<dyn Fn(KeyboardEvent)>);

        // click: lock toggle or copy, resolved from data-type
        let click_controller = controller.clone();
        let swatch_selector = selectors.swatch.clone();
        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(role_element)) = target.closest("[data-type]") else {
                return;
            };
            let role = role_element
                .get_attribute("data-type")
                .and_then(|value| TargetRole::from_data_type(&value));
            let slot = target
                .closest(&swatch_selector)
                .ok()
                .flatten()
                .and_then(|container| containers.iter().position(|c| *c == container));
            let text = role_element.text_content().unwrap_or_default();

            if let Some(action) = click_action(role, slot, text.trim()) {
                if let Err(err) = click_controller.borrow_mut().dispatch(action) {
                    log::warn!("{}", err);
                }
            }
        }) as Box<dyn Fn(MouseEvent)>);

        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        Ok(Self {
            _controller: controller,
            _on_keydown: on_keydown,
            _on_click: on_click,
        })
    }
}

thread_local! {
    static APP: RefCell<Option<WebApp>> = const { RefCell::new(None) };
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting Swatchpad (WASM)");
    for shortcut in ShortcutRegistry::all() {
        log::debug!("{:20} {}", shortcut.input, shortcut.description);
    }

    match WebApp::mount(PaletteConfig::default(), DomSelectors::default()) {
        Ok(app) => APP.with(|cell| *cell.borrow_mut() = Some(app)),
        Err(e) => log::error!("Failed to start: {}", e),
    }
}
