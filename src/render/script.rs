//! Browser-side behaviour for generated pages
//!
//! Mirrors the headless state machines: hotspot listeners are attached after
//! the viewer's `load` event and re-resolved by slot name on every click,
//! pinout zoom clamps to the same limits, and the copy button resets after
//! the same delay.

/// Inline script included in every page
pub const SITE_JS: &str = r#"
(function () {
    // Hotspot router
    document.querySelectorAll('model-viewer[data-hotspots]').forEach(function (viewer) {
        var card = document.getElementById(viewer.getAttribute('data-card'));
        var binding = null;

        function select(button) {
            if (!card) return;
            card.querySelector('[data-field="label"]').textContent = button.getAttribute('data-label') || '';
            card.querySelector('[data-field="description"]').textContent = button.getAttribute('data-description') || '';
            var link = card.querySelector('[data-field="datasheet"]');
            var url = button.getAttribute('data-datasheet');
            if (url) {
                link.querySelector('a').setAttribute('href', url);
                link.hidden = false;
            } else {
                link.hidden = true;
            }
            card.hidden = false;
        }

        function attach() {
            if (binding) return;
            var buttons = viewer.querySelectorAll('button[data-hotspot-slot]');
            if (buttons.length === 0) return;
            binding = function (event) {
                var slot = event.currentTarget.getAttribute('data-hotspot-slot');
                var match = viewer.querySelector('button[data-hotspot-slot="' + CSS.escape(slot) + '"]');
                if (match) select(match);
            };
            buttons.forEach(function (button) {
                button.addEventListener('click', binding);
            });
        }

        viewer.addEventListener('load', attach);
        if (viewer.loaded) attach();

        if (card) {
            var close = card.querySelector('[data-action="close"]');
            if (close) {
                close.addEventListener('click', function () {
                    card.hidden = true;
                });
            }
        }
    });

    // Pinout zoom
    document.querySelectorAll('[data-pinout]').forEach(function (frame) {
        var min = parseFloat(frame.getAttribute('data-min'));
        var max = parseFloat(frame.getAttribute('data-max'));
        var step = parseFloat(frame.getAttribute('data-step'));
        var scale = parseFloat(frame.getAttribute('data-scale'));
        var image = frame.querySelector('img');
        var label = frame.querySelector('.pinout-zoom-label');
        var zoomIn = frame.querySelector('[data-zoom="in"]');
        var zoomOut = frame.querySelector('[data-zoom="out"]');
        var reset = frame.querySelector('[data-zoom="reset"]');

        function apply() {
            image.style.transform = 'scale(' + scale + ')';
            label.textContent = Math.round(scale * 100) + '%';
            zoomIn.disabled = scale >= max;
            zoomOut.disabled = scale <= min;
        }

        zoomIn.addEventListener('click', function () { scale = Math.min(scale + step, max); apply(); });
        zoomOut.addEventListener('click', function () { scale = Math.max(scale - step, min); apply(); });
        reset.addEventListener('click', function () { scale = 1; apply(); });

        var placeholder = image.getAttribute('data-placeholder');
        image.addEventListener('error', function () {
            if (placeholder && image.getAttribute('src') !== placeholder) {
                image.setAttribute('src', placeholder);
            }
        });
    });

    // Copy button
    document.querySelectorAll('.code-block').forEach(function (block) {
        var button = block.querySelector('.copy-button');
        var code = block.querySelector('code');
        var delay = parseInt(block.getAttribute('data-feedback-ms'), 10);
        var seq = 0;
        if (!button || !code) return;
        button.addEventListener('click', function () {
            navigator.clipboard.writeText(code.textContent).then(function () {
                var mine = ++seq;
                button.textContent = 'Copied!';
                setTimeout(function () {
                    if (mine === seq) button.textContent = 'Copy';
                }, delay);
            });
        });
    });
})();
"#;
