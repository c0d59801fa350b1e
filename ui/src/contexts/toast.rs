use std::collections::HashMap;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: u32, // milliseconds
    /// Orders toasts on screen, oldest first
    pub sequence: u64,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: 3000,
            sequence: 0,
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    /// Errors stay up longer so they can be read.
    pub fn error_duration(mut self) -> Self {
        self.duration = 5000;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
    next_sequence: u64,
}

impl ToastState {
    /// Toasts in the order they were raised.
    pub fn ordered(&self) -> Vec<Toast> {
        let mut toasts: Vec<_> = self.toasts.values().cloned().collect();
        toasts.sort_by_key(|toast| toast.sequence);
        toasts
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_sequence = self.next_sequence;

        match action {
            ToastAction::Add(mut toast) => {
                toast.sequence = next_sequence;
                next_sequence += 1;
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        std::rc::Rc::new(ToastState {
            toasts,
            next_sequence,
        })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration_ms = toast.duration;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("error toast: {message}");
        self.add(Toast::error(message).error_duration());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn toasts_keep_the_order_they_were_raised_in() {
        let first = Toast::error("업로드에 실패했습니다.".into());
        let second = Toast::success("저장되었습니다.".into());
        let first_id = first.id;

        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Add(first))
            .reduce(ToastAction::Add(second));
        let messages: Vec<_> =
            state.ordered().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["업로드에 실패했습니다.", "저장되었습니다."]);

        let state = state.reduce(ToastAction::Remove(first_id));
        assert_eq!(state.ordered().len(), 1);
        assert_eq!(state.ordered()[0].toast_type, ToastType::Success);
    }

    #[test]
    fn errors_stay_longer_than_successes() {
        let error = Toast::error("x".into()).error_duration();
        assert!(error.duration > Toast::success("y".into()).duration);
    }
}
