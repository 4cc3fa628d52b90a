use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

/// The set of notices currently on screen. Ids are handed out in order so a
/// timed dismissal always removes the notice it was armed for, never a
/// newer one reusing the slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    next_id: u32,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.notices.push(Notice {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

pub enum NoticeAction {
    Push(String, NotificationKind),
    Dismiss(u32),
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(message, kind) => {
                next.push(message, kind);
            }
            NoticeAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct NoticeCardProps {
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(NoticeCard)]
fn notice_card(props: &NoticeCardProps) -> Html {
    // Each card owns its own expiry timer; dismissing early (unmount) drops
    // the timeout before it fires.
    {
        let id = props.notice.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NOTICE_TTL_MS, move || {
                    on_dismiss.emit(id);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let class = match props.notice.kind {
        NotificationKind::Success => "notice-card notice-success",
        NotificationKind::Error => "notice-card notice-error",
    };

    html! {
        <div {class}>{ &props.notice.message }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub board: NoticeBoard,
    pub on_dismiss: Callback<u32>,
}

/// Fixed top-right stack of transient notices. Notices are independent DOM
/// nodes: no cap, no de-duplication, gone on reload.
#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    html! {
        <div class="notice-stack">
            <style>
                {r#"
                    .notice-stack {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        z-index: 3000;
                    }
                    .notice-card {
                        color: white;
                        padding: 16px 24px;
                        border-radius: 12px;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15);
                        max-width: 400px;
                        animation: slideInRight 0.3s ease;
                    }
                    .notice-success { background: #28a745; }
                    .notice-error { background: #dc3545; }
                    @keyframes slideInRight {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                "#}
            </style>
            {
                props.board.notices().iter().map(|notice| {
                    html! {
                        <NoticeCard
                            key={notice.id}
                            notice={notice.clone()}
                            on_dismiss={props.on_dismiss.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_is_five_seconds() {
        assert_eq!(config::NOTICE_TTL_MS, 5_000);
    }

    #[test]
    fn push_hands_out_unique_ids() {
        let mut board = NoticeBoard::default();
        let a = board.push("first", NotificationKind::Success);
        let b = board.push("second", NotificationKind::Error);
        assert_ne!(a, b);
        assert_eq!(board.notices().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_given_notice() {
        let mut board = NoticeBoard::default();
        let a = board.push("stays", NotificationKind::Success);
        let b = board.push("goes", NotificationKind::Error);
        board.dismiss(b);
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].id, a);

        // Dismissing an id that is already gone is a no-op.
        board.dismiss(b);
        assert_eq!(board.notices().len(), 1);
    }

    #[test]
    fn duplicate_messages_stack_independently() {
        let mut board = NoticeBoard::default();
        board.push("same text", NotificationKind::Error);
        board.push("same text", NotificationKind::Error);
        assert_eq!(board.notices().len(), 2);
    }
}
