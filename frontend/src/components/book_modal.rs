use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::{EnquiryRequest, Field};

use crate::enquiry::{send_enquiry, EnquiryForm, SubmitFailure, SubmitStatus};

#[derive(Properties, PartialEq)]
pub struct BookModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub is_dark: bool,
}

pub enum BookModalMsg {
    SetField(Field, String),
    Submit,
    Sent(Result<(), SubmitFailure>),
    Close,
}

pub struct BookModal {
    form: EnquiryForm,
}

impl Component for BookModal {
    type Message = BookModalMsg;
    type Properties = BookModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: EnquiryForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookModalMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            BookModalMsg::Submit => {
                if let Some(request) = self.form.begin_submit() {
                    self.send(ctx, request);
                }
                true
            }
            BookModalMsg::Sent(outcome) => {
                self.form.finish(outcome);
                true
            }
            BookModalMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.is_open {
            return html! {};
        }

        let theme = if props.is_dark { "dark" } else { "light" };
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            BookModalMsg::Submit
        });
        let on_close = ctx.link().callback(|_: MouseEvent| BookModalMsg::Close);
        let submitting = self.form.is_submitting();

        html! {
            <div class="modal-overlay">
                <style>{MODAL_CSS}</style>
                <div class={classes!("book-modal", theme)}>
                    <button class="modal-close" onclick={on_close.clone()}>{"×"}</button>
                    <h2>{"Book Your Live Voice Demo"}</h2>
                    <p class="modal-subtitle">{"Fill out the form and we'll get in touch soon."}</p>

                    {self.render_status()}

                    <form onsubmit={on_submit} novalidate={true}>
                        {self.render_input(ctx, Field::Name, "Name", "text", "Your name", true)}
                        {self.render_input(ctx, Field::Email, "Email", "email", "you@email.com", true)}
                        {self.render_input(ctx, Field::Company, "Company", "text", "Company (optional)", false)}
                        <div class="form-field">
                            <label>{"Message"}</label>
                            <textarea
                                name={Field::Message.as_str()}
                                rows="3"
                                placeholder="How can we help you? (optional)"
                                value={self.form.value(Field::Message).to_string()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    BookModalMsg::SetField(Field::Message, input.value())
                                })}
                            />
                        </div>
                        <div class="modal-actions">
                            <button type="submit" class="submit-button" disabled={submitting}>
                                { if submitting { "Sending..." } else { "Submit" } }
                            </button>
                            <button type="button" class="cancel-button" onclick={on_close}>
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}

impl BookModal {
    fn send(&self, ctx: &Context<Self>, request: EnquiryRequest) {
        // a reply that lands after the modal closed goes to a destroyed scope and is dropped
        ctx.link().send_future(async move {
            BookModalMsg::Sent(send_enquiry(request).await)
        });
    }

    fn render_status(&self) -> Html {
        match self.form.status() {
            SubmitStatus::Idle => html! {},
            SubmitStatus::Success(message) => html! {
                <div class="status-banner success">{message.clone()}</div>
            },
            SubmitStatus::Error(message) => html! {
                <div class="status-banner error">{message.clone()}</div>
            },
        }
    }

    fn render_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
        required: bool,
    ) -> Html {
        let error = self.form.error(field);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            BookModalMsg::SetField(field, input.value())
        });

        html! {
            <div class="form-field">
                <label>
                    {label}
                    if required {
                        <span class="required">{" *"}</span>
                    }
                </label>
                <input
                    type={input_type}
                    name={field.as_str()}
                    placeholder={placeholder}
                    class={classes!(error.map(|_| "invalid"))}
                    value={self.form.value(field).to_string()}
                    {oninput}
                />
                if let Some(error) = error {
                    <p class="field-error">{error}</p>
                }
            </div>
        }
    }
}

const MODAL_CSS: &str = r#"
.modal-overlay { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5); }
.book-modal { position: relative; width: 100%; max-width: 28rem; padding: 2rem; border-radius: 0.5rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3); text-align: left; }
.book-modal.dark { background: #0f172a; color: #fff; border: 1px solid #334155; }
.book-modal.light { background: linear-gradient(135deg, #F0F6FF, #fff, #FFF6F8); color: #0f172a; border: 1px solid #e5e7eb; }
.book-modal h2 { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.5rem; text-align: center; }
.modal-subtitle { margin-bottom: 1.5rem; text-align: center; color: #9ca3af; }
.modal-close { position: absolute; top: 0.75rem; right: 0.75rem; background: none; border: none; font-size: 1.25rem; color: #9ca3af; cursor: pointer; }
.modal-close:hover { color: inherit; }
.form-field { margin-bottom: 1rem; }
.form-field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.25rem; }
.form-field .required { color: #ef4444; }
.form-field input, .form-field textarea { box-sizing: border-box; width: 100%; padding: 0.5rem 0.75rem; border-radius: 0.25rem; border: 1px solid #d1d5db; font: inherit; }
.book-modal.dark input, .book-modal.dark textarea { background: #1e293b; border-color: #334155; color: #fff; }
.form-field input:focus, .form-field textarea:focus { outline: none; box-shadow: 0 0 0 2px #45CAFF; }
.form-field input.invalid { border-color: #f87171; }
.field-error { font-size: 0.75rem; color: #ef4444; margin-top: 0.25rem; }
.status-banner { padding: 0.75rem; border-radius: 0.25rem; margin-bottom: 1rem; font-size: 0.875rem; }
.status-banner.success { background: rgba(34, 197, 94, 0.15); color: #22c55e; }
.status-banner.error { background: rgba(239, 68, 68, 0.15); color: #ef4444; }
.modal-actions { display: flex; gap: 0.5rem; margin-top: 1.5rem; }
.submit-button, .cancel-button { flex: 1; padding: 0.5rem; border-radius: 0.25rem; font-weight: 600; cursor: pointer; }
.submit-button { border: none; color: #fff; background: linear-gradient(90deg, #FF1B6B, #FF4B2B); }
.submit-button:disabled { opacity: 0.6; cursor: not-allowed; }
.cancel-button { background: none; border: 1px solid #d1d5db; color: inherit; }
.book-modal.dark .cancel-button { border-color: #334155; }
"#;
