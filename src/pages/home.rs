use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::gate::ContentGate;
use crate::components::modal::Modal;
use crate::content::{Catalogue, ModalContent};
use crate::hero::Hero;
use crate::sections::intro::SectionIntro;
use crate::sections::showcase::Showcase;
use crate::sections::timeline::Timeline;

#[function_component(Home)]
pub fn home() -> Html {
    let gate = use_state(ContentGate::default);
    let open_modal = use_state(|| None::<Rc<ModalContent>>);
    let catalogue = use_memo(|_| Catalogue::embedded(), ());

    let on_gate_change = {
        let gate = gate.clone();
        Callback::from(move |unlocked: bool| {
            debug!("downstream content {}", if unlocked { "unlocked" } else { "locked" });
            gate.set(ContentGate { unlocked });
        })
    };

    let on_open = {
        let open_modal = open_modal.clone();
        Callback::from(move |content: Rc<ModalContent>| open_modal.set(Some(content)))
    };

    let on_close = {
        let open_modal = open_modal.clone();
        Callback::from(move |_| open_modal.set(None))
    };

    html! {
        <ContextProvider<ContentGate> context={*gate}>
            <main class="home">
                <Hero on_gate_change={on_gate_change} />
                <SectionIntro />
                <div class="home-sections">
                    { for catalogue.sections.iter().map(|section| html! {
                        <Showcase key={section.id.clone()} section={section.clone()} on_open={on_open.clone()} />
                    }) }
                    <Timeline />
                    <Footer />
                </div>
            </main>
            <Modal open={open_modal.is_some()} on_close={on_close} data={(*open_modal).clone()} />
        </ContextProvider<ContentGate>>
    }
}
