use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteColor {
    Yellow,
    Pink,
    Blue,
}

impl NoteColor {
    fn token(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Blue => "blue",
        }
    }
}

struct StickyNote {
    color: NoteColor,
    rotation_deg: i8,
    text: &'static str,
}

static NOTES: [StickyNote; 3] = [
    StickyNote {
        color: NoteColor::Yellow,
        rotation_deg: -3,
        text: "☕ Fueled by coffee & curiosity. Currently obsessed with building cool stuff!",
    },
    StickyNote {
        color: NoteColor::Pink,
        rotation_deg: 2,
        text: "🎯 Fun fact: I debug best at 2 AM with lo-fi beats playing",
    },
    StickyNote {
        color: NoteColor::Blue,
        rotation_deg: -2,
        text: "💡 Welcome to my portfolio 😎 Click the icons to explore!",
    },
];

#[component]
pub(super) fn StickyNotes() -> impl IntoView {
    view! {
        <div class="sticky-notes">
            {NOTES
                .iter()
                .enumerate()
                .map(|(index, note)| {
                    let style = format!(
                        "--note-rotation:{}deg;--note-delay:{}ms;",
                        note.rotation_deg,
                        500 + index * 200
                    );
                    view! {
                        <aside class="sticky-note" data-color=note.color.token() style=style>
                            <p>{note.text}</p>
                            <span class="sticky-note-tape" aria-hidden="true"></span>
                        </aside>
                    }
                })
                .collect_view()}
        </div>
    }
}
