//! Default Play theme

/// Default CSS theme injected into the reference page.
///
/// Override per page with [`PlayConfig::theme`](crate::PlayConfig::theme).
pub const PLAY_THEME: &str = "/* basic theme */
.light-mode {
  --play-color-1: #2a2f45;
  --play-color-2: #757575;
  --play-color-3: #8e8e8e;
  --play-color-accent: #009485;

  --play-background-1: #fff;
  --play-background-2: #fcfcfc;
  --play-background-3: #f8f8f8;
  --play-background-accent: #ecf8f6;

  --play-border-color: rgba(0, 0, 0, 0.1);
}
.dark-mode {
  --play-color-1: rgba(255, 255, 255, 0.9);
  --play-color-2: rgba(255, 255, 255, 0.62);
  --play-color-3: rgba(255, 255, 255, 0.44);
  --play-color-accent: #00ccb8;

  --play-background-1: #1f2129;
  --play-background-2: #282a35;
  --play-background-3: #30323d;
  --play-background-accent: #223136;

  --play-border-color: rgba(255, 255, 255, 0.1);
}
/* Document Sidebar */
.light-mode .t-doc__sidebar {
  --sidebar-background-1: var(--play-background-1);
  --sidebar-item-hover-color: currentColor;
  --sidebar-item-hover-background: var(--play-background-2);
  --sidebar-item-active-background: var(--play-background-accent);
  --sidebar-border-color: var(--play-border-color);
  --sidebar-color-1: var(--play-color-1);
  --sidebar-color-2: var(--play-color-2);
  --sidebar-color-active: var(--play-color-accent);
  --sidebar-search-background: transparent;
  --sidebar-search-border-color: var(--play-border-color);
  --sidebar-search--color: var(--play-color-3);
}

.dark-mode .sidebar {
  --sidebar-background-1: var(--play-background-1);
  --sidebar-item-hover-color: currentColor;
  --sidebar-item-hover-background: var(--play-background-2);
  --sidebar-item-active-background: var(--play-background-accent);
  --sidebar-border-color: var(--play-border-color);
  --sidebar-color-1: var(--play-color-1);
  --sidebar-color-2: var(--play-color-2);
  --sidebar-color-active: var(--play-color-accent);
  --sidebar-search-background: transparent;
  --sidebar-search-border-color: var(--play-border-color);
  --sidebar-search--color: var(--play-color-3);
}

/* advanced */
.light-mode {
  --play-button-1: rgb(49 53 56);
  --play-button-1-color: #fff;
  --play-button-1-hover: rgb(28 31 33);

  --play-color-green: #009485;
  --play-color-red: #d52b2a;
  --play-color-yellow: #ffaa01;
  --play-color-blue: #0a52af;
  --play-color-orange: #953800;
  --play-color-purple: #8251df;

  --play-scrollbar-color: rgba(0, 0, 0, 0.18);
  --play-scrollbar-color-active: rgba(0, 0, 0, 0.36);
}
.dark-mode {
  --play-button-1: #f6f6f6;
  --play-button-1-color: #000;
  --play-button-1-hover: #e7e7e7;

  --play-color-green: #00ccb8;
  --play-color-red: #e5695b;
  --play-color-yellow: #ffaa01;
  --play-color-blue: #78bffd;
  --play-color-orange: #ffa656;
  --play-color-purple: #d2a8ff;

  --play-scrollbar-color: rgba(255, 255, 255, 0.24);
  --play-scrollbar-color-active: rgba(255, 255, 255, 0.48);
}
:root {
  --play-radius: 3px;
  --play-radius-lg: 6px;
  --play-radius-xl: 8px;
}
.play-card:nth-of-type(3) {
  display: none;
}";
