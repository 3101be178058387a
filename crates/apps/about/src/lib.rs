//! About window: a social-profile styled introduction.

mod profile;

use leptos::*;
use system_ui::prelude::*;

use crate::profile::{
    AVATAR_SRC, BIO_LINES, DISPLAY_NAME, FOLLOWERS, FOLLOWING, HANDLE, HIGHLIGHTS, LOCATION,
    WEBSITE,
};
pub use crate::profile::{post, Post, ProfileState, ProfileTab, POSTS};

#[component]
fn ProfileHeader(state: RwSignal<ProfileState>) -> impl IntoView {
    let following = Signal::derive(move || state.with(|state| state.following));

    view! {
        <header class="about-header">
            <Cluster gap=LayoutGap::Lg align=LayoutAlign::Start>
                <div class="about-avatar">
                    <img src=AVATAR_SRC alt=DISPLAY_NAME />
                    <span class="about-online" aria-hidden="true"></span>
                </div>
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Sm>
                        <Heading role=TextRole::Title>{HANDLE}</Heading>
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Primary
                            selected=following
                            pressed=following
                            on_click=Callback::new(move |_| state.update(ProfileState::toggle_follow))
                        >
                            {move || if following.get() { "Following" } else { "Follow" }}
                        </Button>
                        <IconButton icon=IconName::Send aria_label="Message" />
                    </Cluster>
                    <Cluster gap=LayoutGap::Md>
                        <span class="about-count"><strong>{POSTS.len()}</strong>" posts"</span>
                        <span class="about-count"><strong>{FOLLOWERS}</strong>" followers"</span>
                        <span class="about-count"><strong>{FOLLOWING}</strong>" following"</span>
                    </Cluster>
                </Stack>
            </Cluster>

            <Stack layout_class="about-bio" gap=LayoutGap::Sm>
                <Text role=TextRole::Label>{DISPLAY_NAME}</Text>
                {BIO_LINES
                    .iter()
                    .map(|line| view! { <Text role=TextRole::Caption tone=TextTone::Secondary>{*line}</Text> })
                    .collect_view()}
                <Cluster gap=LayoutGap::Md>
                    <Cluster gap=LayoutGap::Sm>
                        <Icon icon=IconName::Location size=IconSize::Xs />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{LOCATION}</Text>
                    </Cluster>
                    <a class="about-website" href=WEBSITE.0 target="_blank" rel="noopener noreferrer">
                        <Icon icon=IconName::Link size=IconSize::Xs />
                        {WEBSITE.1}
                    </a>
                </Cluster>
            </Stack>
        </header>
    }
}

#[component]
fn PostDetail(state: RwSignal<ProfileState>, post: &'static Post) -> impl IntoView {
    let liked = Signal::derive(move || state.with(|state| state.is_liked(post.id)));
    let close = Callback::new(move |_: ev::MouseEvent| state.update(ProfileState::close));

    view! {
        <Modal layout_class="about-post-detail" aria_label=post.title on_dismiss=close>
            <IconButton
                layout_class="about-post-close"
                icon=IconName::Dismiss
                aria_label="Close post"
                on_click=close
            />
            <div class="about-post-banner" data-palette=post.palette>
                <Icon icon=post.icon size=IconSize::Xl />
            </div>
            <Heading role=TextRole::Title>{post.title}</Heading>
            <p class="about-post-body">{post.body}</p>
            <Cluster layout_class="about-post-actions" gap=LayoutGap::Md>
                <Button
                    variant=ButtonVariant::Quiet
                    pressed=liked
                    leading_icon=IconName::Heart
                    aria_label=Signal::derive(move || {
                        let label = if liked.get() { "Unlike" } else { "Like" };
                        label.to_string()
                    })
                    on_click=Callback::new(move |_| state.update(|state| state.toggle_like(post.id)))
                >
                    {move || state.with(|state| state.likes_for(post))}
                </Button>
                <Button variant=ButtonVariant::Quiet leading_icon=IconName::Chat>
                    {post.comments}
                </Button>
                <IconButton layout_class="about-post-save" icon=IconName::Bookmark aria_label="Save post" />
            </Cluster>
        </Modal>
    }
}

#[component]
pub fn AboutApp() -> impl IntoView {
    let state = create_rw_signal(ProfileState::default());
    let open_post = create_memo(move |_| state.with(|state| state.open_post.and_then(post)));

    view! {
        <div class="about-app">
            <ProfileHeader state=state />

            <Cluster layout_class="about-highlights" gap=LayoutGap::Md>
                {HIGHLIGHTS
                    .iter()
                    .map(|(emoji, label)| {
                        view! {
                            <button type="button" class="about-highlight">
                                <span class="about-highlight-ring">{*emoji}</span>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>{*label}</Text>
                            </button>
                        }
                    })
                    .collect_view()}
                <button type="button" class="about-highlight" data-ui-variant="new">
                    <span class="about-highlight-ring">"+"</span>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>"New"</Text>
                </button>
            </Cluster>

            <TabList layout_class="about-tabs" aria_label="Profile sections">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Tab
                                icon=tab.icon()
                                selected=Signal::derive(move || state.with(|state| state.tab == tab))
                                on_click=Callback::new(move |_| state.update(|state| state.tab = tab))
                            >
                                {tab.label()}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>

            <Grid layout_class="about-posts" gap=LayoutGap::None columns=3>
                {POSTS
                    .iter()
                    .map(|post| {
                        let likes = move || state.with(|state| state.likes_for(post));
                        let liked = move || state.with(|state| state.is_liked(post.id));
                        view! {
                            <button
                                type="button"
                                class="about-post-tile"
                                data-palette=post.palette
                                aria-label=post.title
                                on:click=move |_| state.update(|state| state.open(post.id))
                            >
                                <Icon icon=post.icon size=IconSize::Md />
                                <span class="about-post-title">{post.title}</span>
                                <span class="about-post-stats" aria-hidden="true">
                                    <span data-liked=move || if liked() { "true" } else { "false" }>
                                        <Icon icon=IconName::Heart size=IconSize::Xs />
                                        {likes}
                                    </span>
                                    <span>
                                        <Icon icon=IconName::Chat size=IconSize::Xs />
                                        {post.comments}
                                    </span>
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </Grid>

            {move || open_post.get().map(|post| view! { <PostDetail state=state post=post /> })}
        </div>
    }
}
