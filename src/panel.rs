use crate::audio::SpatialAudio;
use crate::constants::*;
use crate::core::{
    slider_number, ControlSurface, HostMessage, Notification, PanelModel, PlayCommand,
};
use crate::dom;
use crate::host::HostChannel;
use crate::toast;
use web_sys as web;

/// Handles to every control on the panel page.
#[derive(Clone)]
pub struct PanelElements {
    pub url: web::HtmlInputElement,
    pub looped: web::HtmlInputElement,
    pub play: web::HtmlElement,
    pub stop: web::HtmlElement,
    pub close: web::HtmlElement,
    pub volume: web::HtmlInputElement,
    pub volume_readout: web::HtmlElement,
    pub radius: web::HtmlInputElement,
    pub radius_readout: web::HtmlElement,
    pub audio: web::HtmlAudioElement,
}

impl PanelElements {
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            url: dom::element(document, ID_URL)?,
            looped: dom::element(document, ID_LOOP)?,
            play: dom::element(document, ID_PLAY)?,
            stop: dom::element(document, ID_STOP)?,
            close: dom::element(document, ID_CLOSE)?,
            volume: dom::element(document, ID_VOLUME)?,
            volume_readout: dom::element(document, ID_VOLUME_READOUT)?,
            radius: dom::element(document, ID_RADIUS)?,
            radius_readout: dom::element(document, ID_RADIUS_READOUT)?,
            audio: dom::element(document, ID_AUDIO)?,
        })
    }

    /// Live slider value in percent. This, not the last STATE volume, scales
    /// the distance attenuation.
    pub fn slider_volume_percent(&self) -> f32 {
        slider_number(&self.volume.value()) as f32
    }
}

impl ControlSurface for PanelElements {
    fn set_url(&mut self, url: &str) {
        self.url.set_value(url);
    }

    fn set_looped(&mut self, looped: bool) {
        self.looped.set_checked(looped);
    }

    fn set_volume_text(&mut self, text: &str) {
        self.volume.set_value(text);
        self.volume_readout.set_text_content(Some(text));
    }

    fn set_radius_text(&mut self, text: &str) {
        self.radius.set_value(text);
        self.radius_readout.set_text_content(Some(text));
    }
}

/// Glue between host messages, the form controls and the audio engine.
pub struct Panel {
    document: web::Document,
    els: PanelElements,
    model: PanelModel,
    audio: SpatialAudio,
    host: HostChannel,
}

impl Panel {
    pub fn new(document: web::Document, els: PanelElements, host: HostChannel) -> Self {
        let audio = SpatialAudio::new(els.audio.clone());
        Self {
            document,
            els,
            model: PanelModel::default(),
            audio,
            host,
        }
    }

    pub fn elements(&self) -> &PanelElements {
        &self.els
    }

    pub fn handle_message(&mut self, msg: HostMessage) {
        log::debug!("[panel] <- {}", msg.kind());
        match msg {
            HostMessage::Open => dom::set_visible(&self.document, true),
            HostMessage::State(sync) => self.model.apply_state(&sync, &mut self.els),
            HostMessage::Play(req) => self.audio.play(&PlayCommand::from_request(&req)),
            HostMessage::Stop => {
                self.audio.stop();
                log::info!("[audio] stopped url={}", self.audio.state().url);
            }
            HostMessage::Pos(update) => {
                let volume = self.els.slider_volume_percent();
                if let Err(e) =
                    self.audio
                        .update_position(update.listener, update.source, None, volume)
                {
                    log::debug!("[audio] positioning failed: {:?}", e);
                }
            }
            HostMessage::HasSpeaker(presence) => self.model.has_speaker = presence.has,
            HostMessage::Unknown => log::debug!("[panel] ignoring unknown message type"),
        }
    }

    pub fn on_play_clicked(&self) {
        let url = self.els.url.value();
        match self.model.request_play(&url, self.els.looped.checked()) {
            Ok(note) => self.host.notify(note),
            Err(refused) => toast::flash(&self.document, &refused.to_string()),
        }
    }

    pub fn on_stop_clicked(&self) {
        self.host.notify(Notification::Stop {});
    }

    pub fn on_close_clicked(&self) {
        dom::set_visible(&self.document, false);
        self.host.notify(Notification::Close {});
    }

    pub fn on_volume_changed(&mut self, raw: &str) {
        self.els.set_volume_text(raw);
        self.host.notify(Notification::SetVolume {
            volume: slider_number(raw),
        });
    }

    pub fn on_radius_changed(&mut self, raw: &str) {
        self.els.set_radius_text(raw);
        self.host.notify(Notification::SetRadius {
            radius: slider_number(raw),
        });
    }
}
