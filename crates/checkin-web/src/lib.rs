#![cfg(target_arch = "wasm32")]
use checkin_core::{evaluate_gate, CheckinConfig, LocationTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod geolocation;
mod status;
mod ui;

/// Page-wide shared state, cloned into event handlers and spawned tasks.
struct App {
    config: CheckinConfig,
    tracker: RefCell<LocationTracker>,
    document: web::Document,
}

impl App {
    fn render(&self) {
        let gate = evaluate_gate(self.tracker.borrow().state(), &self.config);
        ui::render(&self.document, &gate, &self.config);
    }
}

/// Read optional per-deployment overrides off the mount element.
fn config_from_document(document: &web::Document) -> CheckinConfig {
    let mount = document.get_element_by_id("checkin-app");
    let attr = |name: &str| mount.as_ref().and_then(|el| el.get_attribute(name));
    let parse = |name: &str| attr(name).and_then(|s| s.trim().parse::<f64>().ok());

    CheckinConfig::from_parts(
        parse("data-target-lat"),
        parse("data-target-lng"),
        parse("data-radius-feet"),
        attr("data-form-url"),
    )
}

fn wire_retry_button(app: &Rc<App>) {
    let app_retry = app.clone();
    dom::add_click_listener(&app.document, "retry-button", move || {
        log::info!("[location] retry requested");
        begin_acquisition(&app_retry);
    });
}

/// Start one acquisition attempt and render its outcome when it lands.
///
/// Safe to call repeatedly. The tracker discards outcomes from superseded
/// attempts, so only the newest call's result ever reaches the page.
fn begin_acquisition(app: &Rc<App>) {
    let attempt = app.tracker.borrow_mut().begin_attempt();
    app.render();

    let app_task = app.clone();
    spawn_local(async move {
        let started = Instant::now();
        let outcome = match geolocation::from_window() {
            Ok(geo) => geolocation::current_position(&geo).await,
            Err(e) => Err(e),
        };
        let accepted = {
            let mut tracker = app_task.tracker.borrow_mut();
            match outcome {
                Ok(location) => tracker.resolve(attempt, location),
                Err(error) => tracker.fail(attempt, error),
            }
        };
        if accepted {
            log::info!(
                "[location] attempt {} settled in {} ms",
                attempt,
                started.elapsed().as_millis()
            );
            app_task.render();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("checkin-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.get_element_by_id("checkin-app").is_none() {
        return Err(anyhow::anyhow!("missing #checkin-app"));
    }

    let config = config_from_document(&document);
    log::info!(
        "[config] target ({:.7}, {:.7}) radius {:.0} ft",
        config.target.latitude,
        config.target.longitude,
        config.radius_feet
    );

    let app = Rc::new(App {
        config,
        tracker: RefCell::new(LocationTracker::new()),
        document,
    });

    wire_retry_button(&app);

    // One automatic acquisition per page load; anything after this is the
    // visitor pressing retry.
    begin_acquisition(&app);
    Ok(())
}
