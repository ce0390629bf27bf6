use genblog_common::SubscribeForm;
use leptos::prelude::*;

/// Footer with the RSS/e-mail subscription form.
#[component]
pub fn Footer(
    /// Starting form state (pre-filled or already submitted)
    #[prop(optional)]
    subscribe: SubscribeForm,
) -> impl IntoView {
    let form = RwSignal::new(subscribe);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.submit());
    };

    view! {
        <footer class="site-footer" id="subscribe">
            <h3>"RSS Aboneliği"</h3>
            {move || if form.with(|f| f.is_submitted()) {
                view! {
                    <p class="form-confirmation" role="status">
                        {form.with(|f| f.confirmation())}
                    </p>
                }.into_any()
            } else {
                view! {
                    <form class="subscribe-form" on:submit=on_submit>
                        <input
                            type="email"
                            name="email"
                            placeholder="E-posta adresiniz"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                        <button type="submit" class="btn">"Abone Ol"</button>
                    </form>
                }.into_any()
            }}
        </footer>
    }
}
