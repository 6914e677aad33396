use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4500;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "alert-info",
            ToastLevel::Success => "alert-success",
            ToastLevel::Error => "alert-danger",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub text: String,
    pub level: ToastLevel,
}

#[derive(Clone, PartialEq, Debug)]
pub struct QueuedToast {
    pub id: u32,
    pub message: ToastMessage,
}

/// Queued, non-blocking notifications. Every toast auto-dismisses after a few
/// seconds and can be closed by hand; nothing ever blocks the event loop.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<QueuedToast>,
}

pub enum ToastAction {
    Push(ToastMessage),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(message) => {
                let id = queue.next_id;
                queue.next_id = queue.next_id.wrapping_add(1);
                queue.toasts.push(QueuedToast { id, message });
            }
            ToastAction::Dismiss(id) => {
                queue.toasts.retain(|toast| toast.id != id);
            }
        }
        std::rc::Rc::new(queue)
    }
}

/// Context handle pages use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    sink: Callback<ToastMessage>,
}

impl Toaster {
    pub fn new(sink: Callback<ToastMessage>) -> Self {
        Self { sink }
    }

    pub fn show(&self, text: impl Into<String>, level: ToastLevel) {
        self.sink.emit(ToastMessage {
            text: text.into(),
            level,
        });
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster context should be mounted")
}

#[derive(PartialEq, Properties)]
struct ItemProps {
    toast: QueuedToast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ItemProps) -> Html {
    // Each toast schedules its own dismissal when it enters the DOM.
    use_effect_with(props.toast.id, {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        move |_| {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                on_dismiss.emit(id);
            });
        }
    });

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let classes = classes!(
        "alert",
        props.toast.message.level.alert_class(),
        "alert-dismissible",
        "shadow-sm"
    );
    html! {
        <div class={classes} role="alert">
            {&props.toast.message.text}
            <button type="button" class="btn-close" onclick={on_close}></button>
        </div>
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub toasts: Vec<QueuedToast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &Props) -> Html {
    html! {
        <div class="toast-stack position-fixed bottom-0 end-0 p-3">
            {
                props.toasts.iter().map(|toast| {
                    html! {
                        <ToastItem
                            key={toast.id}
                            toast={toast.clone()}
                            on_dismiss={props.on_dismiss.clone()} />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
