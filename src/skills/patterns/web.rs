//! Rule tables for browser-side languages and libraries.

use super::{RuleSpec, rule};

pub(super) const JS: &[RuleSpec] = &[
    rule(r"\b(?:let|const|var)\s+[\w$]+", &["variables"]),
    rule(r"\btypeof\b|\b(?:null|undefined|NaN|Infinity)\b", &["data_types"]),
    rule(r"[\w)\]]\s*(?:\*\*|[*/%])\s*[\w(]|\+\+|--", &["arith_ops"]),
    rule(r"===|!==|[\w)\]]\s*(?:<=|>=)\s*[\w(]", &["comp_ops"]),
    rule(r"&&|\|\||![\w(]", &["logic_ops"]),
    rule(r"\bif\s*\(|\bswitch\s*\(", &["cond_stmts"]),
    rule(r"\b(?:for|while)\s*\(|\bdo\s*\{", &["loops"]),
    rule(r"\bfunction\b", &["functions"]),
    rule(r"=>", &["arrow_funcs"]),
    rule(
        r"\.(?:push|pop|shift|unshift|slice|splice|concat|indexOf|includes|find|findIndex|join|reverse|sort)\s*\(",
        &["array_methods"],
    ),
    rule(
        r"\.(?:map|filter|reduce|forEach|some|every|flatMap)\s*\(",
        &["higher_order_funcs"],
    ),
    rule(
        r"\bObject\.(?:keys|values|entries|assign|freeze|create|defineProperty)\s*\(|\bdelete\s+[\w$]+\.",
        &["obj_manip"],
    ),
    rule(
        r"\.(?:split|trim|toUpperCase|toLowerCase|substring|substr|replace|replaceAll|startsWith|endsWith|padStart|padEnd|charAt|repeat)\s*\(",
        &["string_methods"],
    ),
    rule(r"`[^`]*\$\{", &["template_literals"]),
    rule(r"\b(?:let|const|var)\s*[\[{]", &["destructuring_assignment"]),
    rule(r"\.\.\.[\w$\[{(]", &["spread_rest"]),
    rule(
        r"\breturn\s+function\b|\breturn\s+\(?[\w$,\s]*\)?\s*=>",
        &["closures"],
    ),
    rule(r"\bclass\s+[\w$]+|\bnew\s+[A-Z][\w$]*\s*\(", &["classes_objects"]),
    rule(r"\bclass\s+[\w$]+\s+extends\b|\bsuper\s*\(", &["inheritance"]),
    rule(r"\btry\s*\{|\bcatch\s*\(|\bthrow\s+", &["error_handle"]),
    rule(
        r"\bnew\s+Promise\s*\(|\.then\s*\(|\bPromise\.(?:all|race|allSettled|any|resolve|reject)\s*\(",
        &["promises"],
    ),
    rule(
        r"\basync\b|\bawait\b|\bsetTimeout\s*\(|\bsetInterval\s*\(",
        &["async_prog"],
    ),
    rule(r"\bJSON\.(?:parse|stringify)\s*\(", &["json"]),
    rule(
        r"\bnew\s+RegExp\s*\(|[=(,]\s*/[^/\n*][^/\n]*/[gimsuy]*\s*[;,).]|\.(?:test|match|matchAll)\s*\(",
        &["regexp"],
    ),
    rule(
        r"\bdocument\.(?:getElementById|getElementsByClassName|getElementsByTagName|querySelector|querySelectorAll)\s*\(",
        &["dom_select"],
    ),
    rule(
        r"\.(?:innerHTML|textContent|innerText|appendChild|removeChild|setAttribute|classList)\b|\bdocument\.createElement\s*\(",
        &["dom_manip"],
    ),
    rule(
        r"\.addEventListener\s*\(|\bon(?:click|change|submit|load|input|keydown|keyup)\s*=",
        &["event_handle"],
    ),
    rule(
        r"\bimport\s+[\w{*$]|\bexport\s+(?:default|const|function|class|let)\b|\brequire\s*\(",
        &["modules"],
    ),
    rule(r"\bfetch\s*\(|\bXMLHttpRequest\b|\baxios\.", &["http_requests"]),
    rule(r"\b(?:localStorage|sessionStorage)\.", &["web_storage"]),
    rule(r"\bMath\.\w+", &["math_obj"]),
    rule(r"\bnew\s+Date\s*\(|\bDate\.now\s*\(", &["date_obj"]),
];

pub(super) const TYPESCRIPT: &[RuleSpec] = &[
    rule(
        r"[\w$)]\s*:\s*(?:string|number|boolean|any|void|unknown|never|object)\b",
        &["type_annotations"],
    ),
    rule(r"\binterface\s+[\w$]+", &["interfaces"]),
    rule(r"\btype\s+[\w$]+\s*(?:<[^>]*>)?\s*=", &["type_aliases"]),
    rule(
        r"\btype\s+\w+\s*=\s*[^;\n]*\||:\s*(?:string|number|boolean|null|undefined)\s*\|",
        &["union_types"],
    ),
    rule(
        r"\bfunction\s+\w+\s*<|\bclass\s+\w+\s*<|\binterface\s+\w+\s*<|\w\s*<\s*T\b",
        &["generics"],
    ),
    rule(r"\benum\s+[\w$]+", &["enums"]),
    rule(r"\bclass\s+[\w$]+", &["classes"]),
    rule(
        r"\b(?:public|private|protected|readonly)\s+[\w$]+",
        &["access_modifiers"],
    ),
    rule(r"\babstract\s+class\b", &["abstract_classes"]),
    rule(r"[\w$]+\?\s*:", &["optional_props"]),
    rule(
        r"\bas\s+(?:[A-Z][\w$]*|string|number|any|unknown|const)\b",
        &["type_assertions"],
    ),
    rule(r":\s*\[\s*(?:string|number|boolean)\s*,", &["tuples"]),
    rule(
        r"\b(?:Partial|Required|Readonly|Record|Pick|Omit|Exclude|Extract|NonNullable|ReturnType|Parameters)\s*<",
        &["utility_types"],
    ),
    rule(r"\bimport\s+[\w{*$]|\bexport\s+", &["modules"]),
    rule(r"\basync\b|\bPromise\s*<", &["async"]),
    rule(r"(?m)^\s*@[\w$]+", &["decorators"]),
    rule(r#"\b(?:namespace|declare\s+module)\s+[\w$"']"#, &["namespaces"]),
    rule(
        r"\btypeof\s+[\w$.]+\s*===|\binstanceof\b|\bis\s+[A-Z][\w$]*\b",
        &["type_guards"],
    ),
];

pub(super) const REACT: &[RuleSpec] = &[
    rule(
        r"\bfunction\s+[A-Z]\w*\s*\(|\bconst\s+[A-Z]\w*\s*=\s*\(|\bclass\s+\w+\s+extends\s+(?:React\.)?(?:Pure)?Component\b",
        &["components"],
    ),
    rule(r"<[A-Z][\w.]*[\s/>]|\breturn\s*\(\s*<", &["jsx"]),
    rule(r"\bprops\.\w+|\(\s*\{\s*[\w,\s]+\}\s*\)\s*=>", &["props"]),
    rule(r"\buseState\s*\(", &["use_state_hook"]),
    rule(r"\buse(?:Layout)?Effect\s*\(", &["use_effect_hook"]),
    rule(r"\bcreateContext\s*\(|\buseContext\s*\(|\.Provider\b", &["context_api"]),
    rule(r"\buseRef\s*\(|\bcreateRef\s*\(|\bforwardRef\s*\(", &["refs"]),
    rule(
        r"\b(?:useMemo|useCallback)\s*\(|\bReact\.memo\s*\(",
        &["memoization"],
    ),
    rule(r"\buseReducer\s*\(", &["use_reducer_hook"]),
    rule(
        r"\bfunction\s+use[A-Z]\w*\s*\(|\bconst\s+use[A-Z]\w*\s*=",
        &["custom_hooks"],
    ),
    rule(r"\bon[A-Z]\w*\s*=\s*\{", &["event_handling"]),
    rule(
        r"\{[^{}\n]*&&\s*\(?\s*<|\{[^{}\n]*\?\s*\(?\s*<",
        &["conditional_render"],
    ),
    rule(r"\.map\s*\([^)]*\)?\s*=>\s*\(?\s*<", &["list_keys"]),
    rule(r"\bkey\s*=\s*\{", &["list_keys"]),
    rule(
        r"<(?:form|input|textarea|select)\b[^>]*\b(?:value|onChange|onSubmit)\s*=",
        &["forms"],
    ),
    rule(
        r"\bextends\s+(?:React\.)?(?:Pure)?Component\b|\bthis\.setState\s*\(",
        &["class_components"],
    ),
    rule(
        r"\b(?:componentDidMount|componentDidUpdate|componentWillUnmount|shouldComponentUpdate)\s*\(",
        &["lifecycle_methods"],
    ),
    rule(r"\bstyle\s*=\s*\{\{|\bclassName\s*=", &["styling"]),
    rule(
        r"\b(?:BrowserRouter|Routes|Route|useNavigate|useParams)\b|<Link\b",
        &["routing"],
    ),
    rule(r"\bReactDOM\.(?:render|createRoot)\s*\(|\bcreateRoot\s*\(", &["render_dom"]),
    rule(r"<>|<(?:React\.)?Fragment\b", &["fragments"]),
];

pub(super) const JQUERY: &[RuleSpec] = &[
    rule(r#"\$\(\s*['"][^'"]+['"]\s*\)|\bjQuery\s*\(\s*['"]"#, &["selectors"]),
    rule(
        r"\$\(\s*document\s*\)\.ready\s*\(|\$\(\s*function\s*\(",
        &["document_ready"],
    ),
    rule(
        r"\.(?:on|off|click|dblclick|hover|keyup|keydown|keypress|submit|change|focus|blur|mouseenter|mouseleave)\s*\(",
        &["event_handling"],
    ),
    rule(
        r"\.(?:append|prepend|after|before|remove|empty|html|text|replaceWith|clone|wrap)\s*\(",
        &["dom_manipulation"],
    ),
    rule(r"\.(?:attr|prop|removeAttr|val|data)\s*\(", &["attributes"]),
    rule(
        r"\.(?:addClass|removeClass|toggleClass|hasClass|css)\s*\(",
        &["css_classes"],
    ),
    rule(
        r"\.(?:show|hide|toggle|fadeIn|fadeOut|fadeToggle|fadeTo|slideUp|slideDown|slideToggle)\s*\(",
        &["effects"],
    ),
    rule(r"\.(?:animate|stop|delay|queue|finish)\s*\(", &["animations"]),
    rule(
        r"\.(?:find|children|parent|parents|closest|siblings|next|prev|first|last|eq|filter|not)\s*\(",
        &["traversal"],
    ),
    rule(r"\$\.(?:ajax|get|post|getJSON)\s*\(|\.load\s*\(", &["ajax"]),
    rule(r"\.each\s*\(", &["iteration"]),
    rule(
        r"\.(?:width|height|innerWidth|innerHeight|outerWidth|outerHeight|offset|position|scrollTop)\s*\(",
        &["dimensions"],
    ),
    rule(
        r"\$\.(?:extend|trim|isArray|map|grep|inArray|parseJSON|type)\s*\(",
        &["utilities"],
    ),
];

pub(super) const HTML: &[RuleSpec] = &[
    rule(r"(?i)<!DOCTYPE\s+html|<html\b|<head\b|<body\b", &["basic_structure"]),
    rule(r"(?i)<(?:meta|title|link|base)\b", &["head_elements"]),
    rule(r"(?i)<h[1-6]\b", &["headings"]),
    rule(
        r"(?i)<(?:p|strong|em|b|i|u|mark|small|sub|sup|br|hr|blockquote|pre|code|span)\b",
        &["text_formatting"],
    ),
    rule(r"(?i)<a\b[^>]*\bhref\s*=", &["links"]),
    rule(r"(?i)<(?:img|picture|figure|figcaption)\b", &["images"]),
    rule(r"(?i)<(?:ul|ol|li|dl|dt|dd)\b", &["lists"]),
    rule(
        r"(?i)<(?:table|tr|td|th|thead|tbody|tfoot|caption)\b",
        &["tables"],
    ),
    rule(
        r"(?i)<(?:form|input|label|select|option|textarea|button|fieldset|legend)\b",
        &["forms"],
    ),
    rule(
        r"(?i)<(?:input|textarea|select)\b[^>]*\b(?:required|pattern|minlength|maxlength)\b",
        &["form_validation"],
    ),
    rule(
        r"(?i)<(?:header|footer|nav|main|section|article|aside|details|summary|time)\b",
        &["semantic_elements"],
    ),
    rule(
        r"(?i)<(?:audio|video|source|track|iframe|embed|object|canvas|svg)\b",
        &["multimedia"],
    ),
    rule(r"(?i)<script\b|<noscript\b", &["scripts"]),
    rule(r#"(?i)<style\b|\bstyle\s*=\s*["']"#, &["styles"]),
    rule(r#"(?i)\b(?:id|class)\s*=\s*["']"#, &["attributes"]),
    rule(r"(?i)\baria-[\w-]+\s*=|\brole\s*=|\balt\s*=", &["accessibility"]),
    rule(r"(?i)<div\b", &["layout_containers"]),
    rule(r"<!--", &["comments"]),
    rule(r"&(?:[a-zA-Z]+|#\d+|#x[0-9a-fA-F]+);", &["entities"]),
];

pub(super) const CSS: &[RuleSpec] = &[
    rule(
        r"(?m)^\s*[.#]?[\w-]+(?:\s*[,>+~]\s*[.#]?[\w-]+)*\s*\{",
        &["selectors"],
    ),
    rule(r"(?m)^[^{}\n]*[.#][a-zA-Z][\w-]*[^{}\n]*\{", &["class_id_selectors"]),
    rule(
        r":(?:hover|active|focus|visited|first-child|last-child|nth-child|nth-of-type|not|checked|disabled)\b",
        &["pseudo_classes"],
    ),
    rule(
        r"::?(?:before|after|first-line|first-letter|placeholder|selection)\b",
        &["pseudo_elements"],
    ),
    rule(r"[\w\s]\[[\w-]+(?:[|^$*]?=[^\]]+)?\]", &["attribute_selectors"]),
    rule(
        r"\b(?:color|background-color|border-color)\s*:|#[0-9a-fA-F]{3,8}\b|\b(?:rgb|rgba|hsl|hsla)\s*\(",
        &["colors"],
    ),
    rule(
        r"\b(?:margin|padding|border|box-sizing|width|height)(?:-[a-z]+)?\s*:",
        &["box_model"],
    ),
    rule(
        r"\b(?:font|font-family|font-size|font-weight|font-style|line-height|letter-spacing|text-align|text-decoration|text-transform)\s*:",
        &["typography"],
    ),
    rule(
        r"\bbackground(?:-image|-size|-position|-repeat)?\s*:",
        &["backgrounds"],
    ),
    rule(
        r"\bposition\s*:\s*(?:relative|absolute|fixed|sticky)|\bz-index\s*:",
        &["positioning"],
    ),
    rule(r"\b(?:display|visibility|overflow|opacity)\s*:", &["display_visibility"]),
    rule(
        r"\bdisplay\s*:\s*(?:inline-)?flex\b|\b(?:flex|flex-direction|flex-wrap|justify-content|align-items|align-self|flex-grow|flex-shrink|flex-basis)\s*:",
        &["flexbox"],
    ),
    rule(
        r"\bdisplay\s*:\s*(?:inline-)?grid\b|\bgrid-[\w-]+\s*:",
        &["grid_layout"],
    ),
    rule(r"\btransition(?:-[\w-]+)?\s*:", &["transitions"]),
    rule(r"@keyframes\b|\banimation(?:-[\w-]+)?\s*:", &["animations"]),
    rule(r"\btransform\s*:", &["transforms"]),
    rule(r"@media\b", &["media_queries"]),
    rule(r"--[\w-]+\s*:|\bvar\s*\(\s*--", &["custom_properties"]),
    rule(r"\d(?:rem|em|vh|vw|vmin|vmax)\b|\d%", &["units"]),
    rule(r"\b(?:calc|min|max|clamp)\s*\(", &["functions"]),
    rule(r"\b(?:box-shadow|text-shadow)\s*:", &["shadows"]),
    rule(r"\bborder-radius\s*:", &["borders"]),
    rule(r"@import\b|@font-face\b", &["imports_fonts"]),
    rule(r"!important\b", &["specificity"]),
];
