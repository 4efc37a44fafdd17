pub const CONSOLE_STYLES: &str = r#"
/* Shell */
.console-root {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: #2a2d2e;
    color: #f3f4f6;
    font-family: system-ui, sans-serif;
}

.mono {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.muted {
    color: #9ca3af;
}

/* Navbar */
.console-navbar {
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1.5rem;
    background: #1f2122;
    border-bottom: 1px solid #3a3d3e;
}

.console-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 600;
    letter-spacing: 0.025em;
    color: #fff;
}

.navbar-status {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.play-toggle {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 4px;
    background: #2563eb;
    color: #fff;
    font-weight: 500;
    cursor: pointer;
    transition: background 0.15s;
}

.play-toggle:hover {
    background: #1d4ed8;
}

.play-toggle-active {
    background: #4b5563;
}

.play-toggle-active:hover {
    background: #374151;
}

.status-online {
    color: #22c55e;
    font-weight: 500;
}

/* Map */
.map-frame {
    position: absolute;
    inset: 4rem 0 0 0;
    border: 4px solid #3a3d3e;
    overflow: visible;
}

.battlefield-map {
    position: relative;
    width: 100%;
    height: 100%;
    background: #2a2d2e;
}

.map-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.map-grid {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    opacity: 0.45;
    pointer-events: none;
    z-index: 1;
}

.map-hq {
    position: absolute;
    inset: 0;
    z-index: 5;
}

.hq-area {
    position: absolute;
    inset: 0;
    opacity: 0.3;
    cursor: pointer;
}

.hq-corner {
    position: absolute;
    width: 8px;
    height: 8px;
    transform: translate(-50%, -50%);
    pointer-events: none;
}

.hq-tooltip {
    position: absolute;
    left: 56.5%;
    top: 43%;
    transform: translate(-50%, -100%);
    margin-bottom: 8px;
    padding: 0.5rem 0.75rem;
    background: rgba(0, 0, 0, 0.9);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 4px;
    white-space: nowrap;
    pointer-events: none;
    z-index: 20;
}

.camera-cone {
    background: linear-gradient(to top, rgba(34, 197, 94, 0.45), rgba(34, 197, 94, 0));
}

.camera-cone-alert {
    background: linear-gradient(to top, rgba(239, 68, 68, 0.6), rgba(239, 68, 68, 0));
}

.camera-dot {
    width: 10px;
    height: 10px;
    border-radius: 999px;
    background: #22c55e;
    box-shadow: 0 0 4px #22c55e, 0 0 8px #22c55e;
}

.camera-dot-offline {
    background: #6b7280;
    box-shadow: none;
}

.camera-tag {
    position: absolute;
    left: 14px;
    top: -4px;
    font-size: 0.625rem;
    white-space: nowrap;
    color: #e5e7eb;
}

/* Overlay cards */
.overlay-panel {
    position: absolute;
    z-index: 20;
}

.overlay-cameras {
    top: 5rem;
    left: 1.5rem;
    width: 12rem;
}

.overlay-grid {
    bottom: 1.5rem;
    left: 1.5rem;
    width: 12rem;
}

.overlay-stats {
    top: 600px;
    right: 1.5rem;
    width: 400px;
}

.card {
    background: rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(12px);
    border: 1px solid #3a3d3e;
    border-radius: 8px;
    padding: 1rem;
}

.card-title {
    margin-bottom: 0.75rem;
    font-size: 0.875rem;
    font-weight: 600;
}

.card-body {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.card-divider {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding-top: 0.5rem;
    border-top: 1px solid #3a3d3e;
    font-size: 0.75rem;
}

.camera-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.camera-id {
    font-size: 0.875rem;
    font-weight: 600;
}

.camera-alert {
    color: #ef4444;
}

.status-dot {
    display: inline-block;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 999px;
    background: #22c55e;
    box-shadow: 0 0 4px #22c55e, 0 0 8px #22c55e, 0 0 12px #22c55e;
}

/* Stats */
.stats-row {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 1.5rem;
}

.stat-label {
    font-size: 0.75rem;
    color: #9ca3af;
}

.stat-value {
    font-size: 1.125rem;
    font-weight: 600;
}

.alert-high {
    color: #ef4444;
}

.alert-low {
    color: #22c55e;
}

.threat-empty {
    color: #6b7280;
    font-style: italic;
}

.threat-entry {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem;
    border-radius: 4px;
    color: #d1d5db;
    background: rgba(0, 0, 0, 0.3);
}

.threat-entry-new {
    color: #fff;
    background: rgba(249, 115, 22, 0.3);
    border: 1px solid #f97316;
}

/* Live feed */
.feed {
    position: relative;
    width: 100%;
    height: 100%;
    overflow: hidden;
    background: #000;
}

.feed-video {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    object-position: top;
}

.feed-grid {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.1) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
    background-size: 20px 20px;
}

.feed-crosshair {
    position: absolute;
    left: 50%;
    top: 50%;
    width: 2rem;
    height: 2rem;
    transform: translate(-50%, -50%);
}

.crosshair-h {
    position: absolute;
    top: 50%;
    left: 0;
    right: 0;
    height: 1px;
    background: #fff;
}

.crosshair-v {
    position: absolute;
    left: 50%;
    top: 0;
    bottom: 0;
    width: 1px;
    background: #fff;
}

.crosshair-ring {
    position: absolute;
    left: 50%;
    top: 50%;
    width: 1rem;
    height: 1rem;
    transform: translate(-50%, -50%);
    border: 1px solid #fff;
    border-radius: 999px;
}

.feed-label {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    font-size: 0.75rem;
    color: #d1d5db;
}

.feed-telemetry {
    position: absolute;
    bottom: 0.75rem;
    left: 0.75rem;
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
    font-size: 0.75rem;
    color: #d1d5db;
    background: rgba(0, 0, 0, 0.5);
}
"#;
