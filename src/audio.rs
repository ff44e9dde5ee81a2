use crate::core::{
    plan_position, PlayCommand, PlaybackState, PositionPlan, Vector3, PANNER_MAX_DISTANCE,
    PANNER_REF_DISTANCE, PANNER_ROLLOFF,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// source -> panner -> gain -> destination, built once per session.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub gain: web::GainNode,
    pub panner: web::PannerNode,
    _source: web::MediaElementAudioSourceNode,
}

fn build_graph(element: &web::HtmlAudioElement) -> Result<AudioGraph, JsValue> {
    let ctx = web::AudioContext::new()?;
    let source = ctx.create_media_element_source(element)?;
    let gain = web::GainNode::new(&ctx)?;
    let panner = web::PannerNode::new(&ctx)?;
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.set_distance_model(web::DistanceModelType::Inverse);
    panner.set_ref_distance(PANNER_REF_DISTANCE);
    panner.set_max_distance(PANNER_MAX_DISTANCE);
    panner.set_rolloff_factor(PANNER_ROLLOFF);

    source.connect_with_audio_node(&panner)?;
    panner.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    Ok(AudioGraph {
        ctx,
        gain,
        panner,
        _source: source,
    })
}

/// Positional playback of the panel's `<audio>` element.
pub struct SpatialAudio {
    element: web::HtmlAudioElement,
    graph: Option<AudioGraph>,
    state: PlaybackState,
}

impl SpatialAudio {
    pub fn new(element: web::HtmlAudioElement) -> Self {
        Self {
            element,
            graph: None,
            state: PlaybackState::default(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Build the graph on first use; later calls return the same graph.
    pub fn ensure_graph(&mut self) -> Result<&AudioGraph, JsValue> {
        if self.graph.is_none() {
            let graph = build_graph(&self.element)?;
            log::info!(
                "[audio] graph ready sample_rate={}",
                graph.ctx.sample_rate()
            );
            self.graph = Some(graph);
        }
        self.graph
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio graph unavailable"))
    }

    pub fn play(&mut self, cmd: &PlayCommand) {
        match self.ensure_graph() {
            Ok(graph) => graph.gain.gain().set_value(cmd.gain),
            Err(e) => {
                log::error!("[audio] graph construction failed: {:?}", e);
                return;
            }
        }
        self.element.set_src(&cmd.url);
        self.element.set_loop(cmd.looped);
        // Autoplay policies may reject the start until the user interacts.
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[audio] playback start rejected: {:?}", e);
                }
            }),
            Err(e) => log::debug!("[audio] playback start failed: {:?}", e),
        }
        self.state.begin(cmd);
        log::info!(
            "[audio] play url={} looped={} radius={:.1} gain={:.2}",
            cmd.url,
            cmd.looped,
            cmd.radius,
            cmd.gain
        );
    }

    pub fn stop(&mut self) {
        if let Err(e) = self.element.pause() {
            log::debug!("[audio] pause failed: {:?}", e);
        }
        self.state.end();
    }

    /// Apply one host position update.
    ///
    /// Does nothing before the first PLAY built the graph or when an endpoint
    /// is missing. Positioning errors are returned after the gain has already
    /// been applied.
    pub fn update_position(
        &self,
        listener: Option<Vector3>,
        source: Option<Vector3>,
        radius_override: Option<f32>,
        volume_percent: f32,
    ) -> Result<PositionPlan, JsValue> {
        let radius = radius_override.unwrap_or(self.state.radius);
        let plan = plan_position(
            self.graph.is_some(),
            listener,
            source,
            radius,
            volume_percent,
        );
        let Some(graph) = &self.graph else {
            return Ok(plan);
        };
        if let Some(gain) = plan.gain() {
            graph.gain.gain().set_value(gain);
        }
        if let PositionPlan::Place {
            listener, source, ..
        } = plan
        {
            let panned = place_panner(&graph.panner, source);
            let heard = place_listener(&graph.ctx.listener(), listener);
            panned.and(heard)?;
        }
        Ok(plan)
    }
}

fn has_property(target: &js_sys::Object, name: &str) -> Result<bool, JsValue> {
    js_sys::Reflect::has(target, &JsValue::from_str(name))
}

// Prefer the AudioParam properties; older engines only have setPosition.
fn place_panner(panner: &web::PannerNode, at: Vector3) -> Result<(), JsValue> {
    if has_property(panner, "positionX")? {
        panner.position_x().set_value(at.x);
        panner.position_y().set_value(at.y);
        panner.position_z().set_value(at.z);
    } else if has_property(panner, "setPosition")? {
        #[allow(deprecated)]
        panner.set_position(at.x as f64, at.y as f64, at.z as f64);
    }
    Ok(())
}

// web-sys only binds setPosition on AudioListener, so the params are looked up by name.
fn listener_param(listener: &web::AudioListener, name: &str) -> Result<web::AudioParam, JsValue> {
    Ok(js_sys::Reflect::get(listener, &JsValue::from_str(name))?.unchecked_into())
}

fn place_listener(listener: &web::AudioListener, at: Vector3) -> Result<(), JsValue> {
    if has_property(listener, "positionX")? {
        listener_param(listener, "positionX")?.set_value(at.x);
        listener_param(listener, "positionY")?.set_value(at.y);
        listener_param(listener, "positionZ")?.set_value(at.z);
    } else if has_property(listener, "setPosition")? {
        listener.set_position(at.x as f64, at.y as f64, at.z as f64);
    }
    Ok(())
}
