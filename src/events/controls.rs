use crate::dom;
use crate::panel::Panel;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Buttons and sliders on the panel page.
pub fn wire_controls(panel: &Rc<RefCell<Panel>>) {
    let els = panel.borrow().elements().clone();

    let p = panel.clone();
    dom::add_click_listener(&els.play, move || p.borrow().on_play_clicked());
    let p = panel.clone();
    dom::add_click_listener(&els.stop, move || p.borrow().on_stop_clicked());
    let p = panel.clone();
    dom::add_click_listener(&els.close, move || p.borrow().on_close_clicked());

    wire_slider(&els.volume, &els.volume_readout, panel.clone(), |p, v| {
        p.on_volume_changed(v)
    });
    wire_slider(&els.radius, &els.radius_readout, panel.clone(), |p, v| {
        p.on_radius_changed(v)
    });
}

// `input` only mirrors the value into the readout while dragging;
// `change` commits it and tells the host.
fn wire_slider(
    slider: &web::HtmlInputElement,
    readout: &web::HtmlElement,
    panel: Rc<RefCell<Panel>>,
    on_change: fn(&mut Panel, &str),
) {
    let dragged = slider.clone();
    let readout = readout.clone();
    dom::add_listener(slider, "input", move |_| {
        readout.set_text_content(Some(&dragged.value()));
    });

    let committed = slider.clone();
    dom::add_listener(slider, "change", move |_| {
        let value = committed.value();
        on_change(&mut panel.borrow_mut(), &value);
    });
}
