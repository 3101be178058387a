use system_ui::IconName;

pub(crate) const HANDLE: &str = "hania.seifeldeen";
pub(crate) const DISPLAY_NAME: &str = "Hania Seifeldeen";
pub(crate) const AVATAR_SRC: &str = "/1.jpg";
pub(crate) static BIO_LINES: [&str; 3] = [
    "🎓 Web Developer",
    "💻 Founder of Vertexa Digital Studios",
    "🚀 Building cool stuff one commit at a time",
];
pub(crate) const LOCATION: &str = "Beirut, Lebanon";
pub(crate) const WEBSITE: (&str, &str) = ("https://github.com/hania-cs", "github.com/hania-cs");
pub(crate) const FOLLOWERS: &str = "1.2K";
pub(crate) const FOLLOWING: &str = "384";

pub(crate) static HIGHLIGHTS: [(&str, &str); 4] = [
    ("🎓", "Education"),
    ("💻", "Projects"),
    ("🎨", "Hobbies"),
    ("✈️", "Travel"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    Saved,
    Tagged,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Posts, ProfileTab::Saved, ProfileTab::Tagged];

    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Saved => "Saved",
            Self::Tagged => "Tagged",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Self::Posts => IconName::Grid,
            Self::Saved => IconName::Bookmark,
            Self::Tagged => IconName::PersonTag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub icon: IconName,
    /// Gradient palette token for the tile.
    pub palette: &'static str,
    pub body: &'static str,
    pub likes: u32,
    pub comments: u32,
}

pub static POSTS: [Post; 3] = [
    Post {
        id: 1,
        title: "About Me",
        icon: IconName::Drink,
        palette: "sunset",
        body: "Hey! I'm Hania, a web developer passionate about building modern, user-centered applications with clean, efficient code. I recently graduated with a CS degree and had the incredible opportunity to finish my last university year in Spain as an Erasmus student, which broadened my perspective on technology and collaboration. I love exploring new frameworks, experimenting with cutting-edge tools, and creating projects that solve real problems.",
        likes: 234,
        comments: 12,
    },
    Post {
        id: 2,
        title: "Education",
        icon: IconName::HatGraduation,
        palette: "ocean",
        body: "Modern University for Business and Science\nUniversitat de Lleida\nB.S. Computer Science\nClass of 2025 • GPA: 3.64/4.0",
        likes: 189,
        comments: 8,
    },
    Post {
        id: 3,
        title: "Tech Stack",
        icon: IconName::Code,
        palette: "violet",
        body: "React • TypeScript TailwindCSS • Node.js\nSupabase • MongoDB • MySQL • PostgreSQL\nGit • Docker\n\nAlways learning something new!",
        likes: 312,
        comments: 24,
    },
];

pub fn post(id: u32) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.id == id)
}

/// Interactive state of the profile page. Nothing here persists across window reopenings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub following: bool,
    pub tab: ProfileTab,
    liked: Vec<u32>,
    /// Post shown in the detail overlay.
    pub open_post: Option<u32>,
}

impl ProfileState {
    pub fn toggle_follow(&mut self) {
        self.following = !self.following;
    }

    pub fn is_liked(&self, post_id: u32) -> bool {
        self.liked.contains(&post_id)
    }

    pub fn toggle_like(&mut self, post_id: u32) {
        if let Some(index) = self.liked.iter().position(|id| *id == post_id) {
            self.liked.swap_remove(index);
        } else {
            self.liked.push(post_id);
        }
    }

    /// Like count including the visitor's own like.
    pub fn likes_for(&self, post: &Post) -> u32 {
        post.likes + u32::from(self.is_liked(post.id))
    }

    pub fn open(&mut self, post_id: u32) {
        if post(post_id).is_some() {
            self.open_post = Some(post_id);
        }
    }

    pub fn close(&mut self) {
        self.open_post = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn like_adds_one_while_liked() {
        let mut state = ProfileState::default();
        let first = &POSTS[0];
        assert_eq!(state.likes_for(first), 234);

        state.toggle_like(first.id);
        assert!(state.is_liked(first.id));
        assert_eq!(state.likes_for(first), 235);
        assert_eq!(state.likes_for(&POSTS[1]), 189);

        state.toggle_like(first.id);
        assert_eq!(state.likes_for(first), 234);
    }

    #[test]
    fn follow_toggles() {
        let mut state = ProfileState::default();
        state.toggle_follow();
        assert!(state.following);
        state.toggle_follow();
        assert!(!state.following);
    }

    #[test]
    fn overlay_only_opens_known_posts() {
        let mut state = ProfileState::default();
        state.open(99);
        assert_eq!(state.open_post, None);

        state.open(2);
        assert_eq!(state.open_post, Some(2));
        state.close();
        assert_eq!(state.open_post, None);
    }

    #[test]
    fn likes_survive_closing_the_overlay() {
        let mut state = ProfileState::default();
        state.open(3);
        state.toggle_like(3);
        state.close();
        assert_eq!(state.likes_for(&POSTS[2]), 313);
    }

    #[test]
    fn posts_tab_is_default() {
        assert_eq!(ProfileState::default().tab, ProfileTab::Posts);
    }
}
