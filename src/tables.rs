//! Fixed lookup tables for attribute and listener names.

/// Attributes that would replace the element's content. These are never applied.
pub const PROTECTED_ATTRIBUTES: &[&str] = &["innerHTML", "outerHTML", "textContent", "innerText", "outerText"];

/// Attributes that are written as element properties, since their attribute doesn't reflect into the live value.
pub const DIRECT_PROPERTIES: &[&str] = &["value"];

/// Attributes that are removed rather than set when given a falsy-looking value (`""`, `"0"` or `"false"`).
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
];

/// Lower-cased event handler keys to event names.
pub const LISTENER_NAMES: &[(&str, &str)] = &[
	("onabort", "abort"),
	("onanimationend", "animationend"),
	("onanimationiteration", "animationiteration"),
	("onanimationstart", "animationstart"),
	("onbeforeinput", "beforeinput"),
	("onblur", "blur"),
	("oncanplay", "canplay"),
	("onchange", "change"),
	("onclick", "click"),
	("oncompositionend", "compositionend"),
	("oncompositionstart", "compositionstart"),
	("oncompositionupdate", "compositionupdate"),
	("oncontextmenu", "contextmenu"),
	("oncopy", "copy"),
	("oncut", "cut"),
	("ondblclick", "dblclick"),
	("ondoubleclick", "dblclick"),
	("ondrag", "drag"),
	("ondragend", "dragend"),
	("ondragenter", "dragenter"),
	("ondragleave", "dragleave"),
	("ondragover", "dragover"),
	("ondragstart", "dragstart"),
	("ondrop", "drop"),
	("onended", "ended"),
	("onerror", "error"),
	("onfocus", "focus"),
	("onfocusin", "focusin"),
	("onfocusout", "focusout"),
	("ongotpointercapture", "gotpointercapture"),
	("oninput", "input"),
	("oninvalid", "invalid"),
	("onkeydown", "keydown"),
	("onkeypress", "keypress"),
	("onkeyup", "keyup"),
	("onload", "load"),
	("onlostpointercapture", "lostpointercapture"),
	("onmousedown", "mousedown"),
	("onmouseenter", "mouseenter"),
	("onmouseleave", "mouseleave"),
	("onmousemove", "mousemove"),
	("onmouseout", "mouseout"),
	("onmouseover", "mouseover"),
	("onmouseup", "mouseup"),
	("onpaste", "paste"),
	("onpause", "pause"),
	("onplay", "play"),
	("onpointercancel", "pointercancel"),
	("onpointerdown", "pointerdown"),
	("onpointerenter", "pointerenter"),
	("onpointerleave", "pointerleave"),
	("onpointermove", "pointermove"),
	("onpointerout", "pointerout"),
	("onpointerover", "pointerover"),
	("onpointerup", "pointerup"),
	("onreset", "reset"),
	("onscroll", "scroll"),
	("onselect", "select"),
	("onsubmit", "submit"),
	("ontimeupdate", "timeupdate"),
	("ontoggle", "toggle"),
	("ontouchcancel", "touchcancel"),
	("ontouchend", "touchend"),
	("ontouchmove", "touchmove"),
	("ontouchstart", "touchstart"),
	("ontransitionend", "transitionend"),
	("onvolumechange", "volumechange"),
	("onwheel", "wheel"),
];

/// Framework-style (mostly camelCase) attribute keys to their canonical names.
pub const RENAMED_ATTRIBUTES: &[(&str, &str)] = &[
	("acceptCharset", "accept-charset"),
	("accessKey", "accesskey"),
	("autoComplete", "autocomplete"),
	("autoFocus", "autofocus"),
	("autoPlay", "autoplay"),
	("clipPath", "clip-path"),
	("clipRule", "clip-rule"),
	("colSpan", "colspan"),
	("contentEditable", "contenteditable"),
	("crossOrigin", "crossorigin"),
	("encType", "enctype"),
	("fillOpacity", "fill-opacity"),
	("fillRule", "fill-rule"),
	("formAction", "formaction"),
	("htmlFor", "for"),
	("httpEquiv", "http-equiv"),
	("maxLength", "maxlength"),
	("minLength", "minlength"),
	("noValidate", "novalidate"),
	("readOnly", "readonly"),
	("rowSpan", "rowspan"),
	("spellCheck", "spellcheck"),
	("srcSet", "srcset"),
	("strokeDasharray", "stroke-dasharray"),
	("strokeLinecap", "stroke-linecap"),
	("strokeLinejoin", "stroke-linejoin"),
	("strokeWidth", "stroke-width"),
	("tabIndex", "tabindex"),
	("useMap", "usemap"),
	("xlinkHref", "xlink:href"),
	("xlinkTitle", "xlink:title"),
	("xmlLang", "xml:lang"),
	("xmlSpace", "xml:space"),
	("xmlnsXlink", "xmlns:xlink"),
];

#[must_use]
pub fn is_protected(name: &str) -> bool {
	PROTECTED_ATTRIBUTES.contains(&name)
}

#[must_use]
pub fn is_direct_property(name: &str) -> bool {
	DIRECT_PROPERTIES.contains(&name)
}

#[must_use]
pub fn is_boolean_attribute(name: &str) -> bool {
	BOOLEAN_ATTRIBUTES.contains(&name)
}

/// Whether a boolean-like attribute with this value should be removed instead of set.
#[must_use]
pub fn is_falsy_value(value: &str) -> bool {
	matches!(value, "" | "0" | "false")
}

/// Looks up `key` in `table`, ignoring ASCII case.
#[must_use]
pub fn lookup_ignore_case<'t>(table: &[(&str, &'t str)], key: &str) -> Option<&'t str> {
	table.iter().find(|(from, _)| from.eq_ignore_ascii_case(key)).map(|&(_, to)| to)
}

/// Looks up `key` in `table` exactly.
#[must_use]
pub fn lookup<'t>(table: &[(&str, &'t str)], key: &str) -> Option<&'t str> {
	table.iter().find(|(from, _)| *from == key).map(|&(_, to)| to)
}
