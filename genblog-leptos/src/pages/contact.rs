// Contact page - accepts input, no backend
use genblog_common::{ContactField, ContactForm};
use leptos::prelude::*;

#[component]
pub fn ContactPage(
    /// Starting form state
    #[prop(optional)]
    form: ContactForm,
) -> impl IntoView {
    let form = RwSignal::new(form);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.submit());
    };

    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_string());
    let edit = move |field: ContactField| {
        move |ev: leptos::web_sys::Event| form.update(|f| f.set(field, event_target_value(&ev)))
    };

    view! {
        <section class="contact">
            <h1 class="page-title">"İletişim"</h1>
            {move || if form.with(|f| f.is_submitted()) {
                view! {
                    <div class="form-confirmation" role="status">
                        <p>{form.with(|f| f.confirmation())}</p>
                        <button class="btn" on:click=move |_| form.update(|f| f.reset())>
                            "Yeni mesaj"
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <form class="contact-form" on:submit=on_submit>
                        <input
                            name="name"
                            placeholder="Adınız"
                            prop:value=value(ContactField::Name)
                            on:input=edit(ContactField::Name)
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="E-posta"
                            prop:value=value(ContactField::Email)
                            on:input=edit(ContactField::Email)
                        />
                        <textarea
                            name="message"
                            placeholder="Mesajınız"
                            rows="4"
                            prop:value=value(ContactField::Message)
                            on:input=edit(ContactField::Message)
                        ></textarea>
                        <button type="submit" class="btn">"Gönder"</button>
                    </form>
                }.into_any()
            }}
        </section>
    }
}
