//! Rule tables for compiled general-purpose languages.

use super::{RuleSpec, braces, rule};

pub(super) const C: &[RuleSpec] = &[
    rule(r#"(?m)^\s*#\s*include\s*[<"]"#, &["headers"]),
    rule(
        r"(?m)^\s*#\s*(?:define|ifdef|ifndef|endif|undef|pragma)\b",
        &["preprocessor"],
    ),
    rule(
        r"\b(?:int|char|float|double|long|short|unsigned|signed)\s+\*?\s*\w+\s*(?:=|;|,|\[)",
        &["variables"],
    ),
    rule(
        r"\b(?:unsigned|signed|long|short|double|size_t|u?int\d+_t|bool)\b",
        &["data_types"],
    ),
    rule(r"\bconst\s+\w+", &["constants"]),
    rule(r"[\w)\]]\s*(?:%|<<|>>|&&|\|\|)\s*[\w(]|\+\+|--", &["operators"]),
    rule(r"\bif\s*\(", &["if_else"]),
    rule(r"\bswitch\s*\(", &["switch"]),
    rule(r"\bfor\s*\(", &["for_loop"]),
    rule(r"\bwhile\s*\(|\bdo\s*\{", &["while_loop"]),
    rule(r"\b(?:break|continue)\s*;", &["break_continue"]),
    rule(r"\b\w+\s+\w+\s*\[\s*\w*\s*\]\s*(?:=|;)", &["arrays"]),
    rule(r"\bchar\s+\w+\s*\[\s*\w*\s*\]|\bchar\s*\*\s*\w+", &["strings"]),
    rule(
        r"\bstr(?:len|cpy|ncpy|cat|ncat|cmp|ncmp|chr|str|tok)\s*\(",
        &["string_functions"],
    ),
    rule(
        r"\b(?:int|char|float|double|void|long|short|unsigned|struct\s+\w+|\w+_t)\s*\*+\s*\w+|->",
        &["pointers"],
    ),
    rule(r"[=(,]\s*&[a-zA-Z_]", &["memory_address"]),
    rule(r"\bstruct\s+\w+\s*\{|\btypedef\s+struct\b", &["structures"]),
    rule(r"\benum\s+\w*\s*\{", &["enums"]),
    rule(r"\bunion\s+\w*\s*\{", &["unions"]),
    rule(r"\btypedef\b", &["typedef"]),
    rule(
        r"(?m)^\s*(?:static\s+|inline\s+)*(?:void|int|char|float|double|long|short|unsigned|bool|struct\s+\w+|\w+_t)\s*\*?\s*\w+\s*\([^;{)]*\)\s*\{",
        &["function_declaration"],
    ),
    rule(
        r"\b(?:sqrt|pow|fabs|ceil|floor|sin|cos|tan|log|exp|round)\s*\(|#\s*include\s*<math\.h>",
        &["math_functions"],
    ),
    rule(r"\b(?:scanf|fgets|getchar|gets|sscanf)\s*\(", &["user_input"]),
    rule(
        r"\b(?:printf|puts|putchar|fprintf|sprintf|snprintf)\s*\(",
        &["output"],
    ),
    rule(
        r"%(?:-?\d+)?(?:\.\d+)?(?:ld|lu|lf|zu|d|i|u|f|c|s|p|x|X|o|e|g)",
        &["format_specifiers"],
    ),
    rule(r"\bFILE\s*\*|\bf(?:open|close)\s*\(", &["file_handling"]),
    rule(r"\bf(?:printf|puts|putc|write)\s*\(", &["write_to_files"]),
    rule(r"\bf(?:scanf|gets|getc|read)\s*\(", &["read_files"]),
    rule(r"\b(?:malloc|calloc|realloc|free)\s*\(", &["memory_allocation"]),
    rule(r"//|/\*", &["comments"]),
];

pub(super) const CPP: &[RuleSpec] = &[
    rule(r"\bstd::cout\b|\bcout\s*<<", &["output"]),
    rule(r"\bstd::cin\b|\bcin\s*>>|\bgetline\s*\(", &["user_input"]),
    rule(
        r"\b(?:int|double|float|char|bool|auto|long|short|unsigned|string)\s+\w+\s*(?:=|;|\{)",
        &["variables"],
    ),
    rule(
        r"\b(?:bool|char|double|float|long|short|unsigned|size_t|auto)\b",
        &["data_types"],
    ),
    rule(r"\b(?:const|constexpr)\s+\w+", &["constants"]),
    rule(r"[\w)\]]\s*(?:%|&&|\|\||==|!=)\s*[\w(!]|\+\+|--", &["operators"]),
    rule(r"\?[^:;\n]+:", &["conditions"]),
    rule(r"\bif\s*\(", &["if_else"]),
    rule(r"\bswitch\s*\(", &["switch"]),
    rule(r"\bfor\s*\(", &["for_loop"]),
    rule(r"\bwhile\s*\(|\bdo\s*\{", &["while_loop"]),
    rule(r"\b(?:break|continue)\s*;", &["break_continue"]),
    rule(r"\b\w+\s+\w+\s*\[\s*\w*\s*\]\s*(?:=|;|\{)", &["arrays"]),
    rule(r"\bstd::string\b|\bstring\s+\w+", &["strings"]),
    rule(
        r"\.(?:length|substr|find|append|insert|erase|replace|c_str|compare)\s*\(",
        &["string_manipulation"],
    ),
    rule(r"[\w>]\s*&\s*\w+\s*[=,)]", &["references"]),
    rule(
        r"\b\w+\s*\*\s*\w+\s*(?:=|;)|->|\bnew\s+\w+|\bdelete\s+(?:\[\]\s*)?\w+|\bnullptr\b",
        &["pointers"],
    ),
    rule(
        r"\b(?:unique_ptr|shared_ptr|weak_ptr|make_unique|make_shared)\b",
        &["smart_pointers"],
    ),
    rule(r"\bstruct\s+\w+\s*\{", &["structures"]),
    rule(r"\bclass\s+\w+", &["classes_objects"]),
    rule(r"\b(?:public|private|protected)\s*:", &["access_specifiers"]),
    rule(r"\)\s*:\s*\w+\s*[({]|~\w+\s*\(", &["constructors"]),
    rule(r"\b(?:get|set)[A-Z]\w*\s*\(", &["encapsulation"]),
    rule(
        r"\bclass\s+\w+\s*:\s*(?:(?:public|private|protected)\s+)?\w+",
        &["inheritance"],
    ),
    rule(r"\bvirtual\b|\boverride\b", &["polymorphism"]),
    rule(
        r"\boperator\s*(?:<<|>>|==|!=|<=|>=|\[\]|\(\)|[+\-*/=<>!])",
        &["operator_overloading"],
    ),
    rule(r"\btemplate\s*<", &["templates"]),
    rule(
        r"\b(?:vector|map|set|unordered_map|unordered_set|list|deque|stack|queue|priority_queue|array|pair)\s*<",
        &["standard_containers"],
    ),
    rule(
        r"\b(?:sort|reverse|accumulate|transform|for_each|max_element|min_element|binary_search|count_if|find_if)\s*\(\s*\w+\.begin\s*\(",
        &["algorithms"],
    ),
    rule(
        r"\.(?:begin|end|rbegin|rend|cbegin|cend)\s*\(\s*\)|::iterator\b",
        &["iterators"],
    ),
    rule(r"\[[&=\w,\s]*\]\s*\([^)]*\)\s*(?:->\s*\w+\s*)?\{", &["lambdas"]),
    rule(r"\btry\s*\{|\bcatch\s*\(|\bthrow\b", &["exceptions"]),
    rule(r"\b(?:ifstream|ofstream|fstream)\b", &["files"]),
    rule(
        r"#\s*include\s*<cmath>|\b(?:sqrt|pow|ceil|floor|sin|cos|log|exp|round)\s*\(",
        &["math"],
    ),
    rule(r"\busing\s+namespace\b|\bnamespace\s+\w+\s*\{", &["namespaces"]),
    rule(r"//|/\*", &["comments"]),
];

pub(super) const JAVA: &[RuleSpec] = &[
    rule(r"\bSystem\.out\.print(?:ln|f)?\s*\(", &["output"]),
    rule(r"\bString\.format\s*\(|\.printf\s*\(", &["format"]),
    rule(r"\bnew\s+Scanner\s*\(|\bBufferedReader\b", &["user_input"]),
    rule(
        r"\b(?:int|double|float|char|boolean|long|short|byte|String|var)\s+\w+\s*(?:=|;)",
        &["variables"],
    ),
    rule(
        r"\b(?:int|double|float|char|boolean|long|short|byte)\b",
        &["data_types"],
    ),
    rule(r"\b(?:true|false)\b|\bboolean\b", &["booleans"]),
    rule(
        r"[\w)\]]\s*(?:%|&&|\|\||==|!=|<=|>=)\s*[\w(!]|\+\+|--",
        &["operators"],
    ),
    rule(
        r"\(\s*(?:int|double|float|long|short|byte|char)\s*\)\s*[\w(]|\b(?:Integer\.parseInt|Double\.parseDouble|String\.valueOf)\s*\(",
        &["type_casting"],
    ),
    rule(r"\bString\s+\w+", &["strings"]),
    rule(
        r"\.(?:length|charAt|substring|indexOf|toUpperCase|toLowerCase|trim|equals|equalsIgnoreCase|split|replace|contains|startsWith|endsWith|isEmpty)\s*\(",
        &["string_methods"],
    ),
    rule(r"\bString(?:Builder|Buffer)\b", &["stringbuffer_stringbuilder"]),
    rule(r"\b\w+\s*\[\s*\]\s+\w+|\bnew\s+\w+\s*\[", &["arrays"]),
    rule(r"\bArrays\.\w+\s*\(", &["arrays_methods"]),
    rule(r"\bMath\.\w+\s*\(", &["math_methods"]),
    rule(r"\bif\s*\(", &["if_else"]),
    rule(r"\bswitch\s*\(", &["switch"]),
    rule(r"\bfor\s*\(", &["for_loop"]),
    rule(r"\bwhile\s*\(|\bdo\s*\{", &["while_loop"]),
    rule(r"\b(?:break|continue)\s*;", &["break_continue"]),
    rule(r"\bclass\s+\w+|\bnew\s+[A-Z]\w*\s*\(", &["classes_objects"]),
    rule(
        r"(?m)^\s*(?:private|public|protected)\s+(?:static\s+)?(?:final\s+)?[\w<>\[\]]+\s+\w+\s*(?:=|;)",
        &["class_attributes"],
    ),
    rule(
        r"(?m)^\s*(?:(?:public|private|protected|static|final)\s+)+[\w<>\[\]]+\s+\w+\s*\([^)]*\)\s*(?:throws\s+[\w,\s]+)?\{",
        &["class_methods"],
    ),
    rule(
        r"(?m)^\s*(?:public|private|protected)\s+[A-Z]\w*\s*\([^)]*\)\s*\{",
        &["constructors"],
    ),
    rule(r"\b(?:public|private|protected|static|final|abstract)\b", &["modifiers"]),
    rule(r"\bclass\s+\w+\s+extends\s+\w+|\bsuper\s*[.(]", &["inheritance"]),
    rule(r"@Override\b", &["polymorphism"]),
    rule(r"\babstract\s+(?:class|\w+\s+\w+\s*\()", &["abstraction"]),
    rule(r"\binterface\s+\w+|\bimplements\s+\w+", &["interface"]),
    rule(r"\b(?:get|set)[A-Z]\w*\s*\(", &["encapsulation"]),
    rule(r"(?m)^\s*(?:import|package)\s+[\w.]+", &["packages_api"]),
    rule(r"\btry\s*\{|\bcatch\s*\(|\bthrows?\b", &["exceptions"]),
    rule(r"\bArrayList\b", &["arraylist"]),
    rule(r"\bLinkedList\b", &["linkedlist"]),
    rule(r"\b(?:HashMap|TreeMap|LinkedHashMap)\b", &["hashmap"]),
    rule(r"\b(?:HashSet|TreeSet|LinkedHashSet)\b", &["hashset"]),
    rule(r"\bIterator\s*<|\.iterator\s*\(", &["iterator"]),
    rule(
        r"\b(?:Integer|Double|Character|Boolean|Long|Float|Short|Byte)\b",
        &["wrapper_classes"],
    ),
    rule(r"\b[A-Z]\w*\s*<\s*[A-Z][\w<>,\s?]*>", &["generics"]),
    rule(
        r"\bnew\s+Thread\s*\(|\bextends\s+Thread\b|\bimplements\s+Runnable\b|\bExecutorService\b|\bsynchronized\b",
        &["threads"],
    ),
    rule(r"\(\s*[\w,\s]*\)\s*->|\b\w+\s*->", &["lambda"]),
    rule(
        r"\.stream\s*\(\s*\)|\bStream\.of\s*\(|\bCollectors\.\w+",
        &["stream"],
    ),
    rule(r"\bnew\s+File\s*\(|\bFiles\.\w+\s*\(|\bPaths?\.(?:get|of)\s*\(", &["files"]),
    rule(
        r"\b(?:FileWriter|BufferedWriter|PrintWriter|FileOutputStream)\b",
        &["create_write_files"],
    ),
    rule(
        r"\b(?:FileReader|FileInputStream)\b|\bFiles\.read\w*\s*\(",
        &["read_files"],
    ),
    rule(r"\benum\s+\w+", &["enums"]),
    rule(r"@[A-Z]\w*", &["annotation"]),
    rule(
        r"\b(?:LocalDate|LocalTime|LocalDateTime|DateTimeFormatter)\b",
        &["date"],
    ),
    rule(r"\bPattern\.compile\s*\(|\bMatcher\b|\.matches\s*\(", &["regex"]),
    rule(
        r"\.getClass\s*\(\s*\)|\bClass\.forName\s*\(|\.getDeclared\w+\s*\(",
        &["reflect"],
    ),
    rule(r"\bCollections\.\w+\s*\(", &["collections_methods"]),
    rule(
        r"\b(?:String\s+toString|boolean\s+equals|int\s+hashCode)\s*\(",
        &["object_methods"],
    ),
    rule(
        r"\bSystem\.(?:currentTimeMillis|nanoTime|exit|arraycopy|getProperty|getenv)\s*\(",
        &["system_methods"],
    ),
];

pub(super) const GO: &[RuleSpec] = &[
    rule(r"(?m)^\s*package\s+\w+", &["packages"]),
    rule(r#"(?m)^\s*import\s*[("]"#, &["imports"]),
    rule(r"\bvar\s+\w+|\w+\s*:=", &["variables"]),
    rule(r"\bconst\s+(?:\w+|\()", &["constants"]),
    rule(r"\bfunc\s+\w+\s*\(", &["functions"]),
    rule(
        r"\bfunc\s+[^{\n]*\)\s*\([^)]*,[^)]*\)\s*\{",
        &["multiple_return_values"],
    ),
    rule(r"\.\.\.\s*\w+\s*[,)]|\w+\.\.\.\s*\)", &["variadic_functions"]),
    rule(r"[=(,]\s*func\s*\(|\breturn\s+func\s*\(", &["closures"]),
    rule(r"\bfunc\s*\(\s*\w+\s+\*?\w+\s*\)\s*\w+\s*\(", &["methods"]),
    rule(
        r"[=(,]\s*&[A-Za-z_]|\bnew\s*\(\s*\w+\s*\)|\w+\s+\*[A-Za-z_]\w*",
        &["pointers"],
    ),
    rule(r"\btype\s+\w+\s+struct\b", &["structs"]),
    rule(r"\btype\s+\w+\s+interface\b", &["interfaces"]),
    rule(r"\bfunc\s+\w+\s*\[\s*\w+\s+\w+", &["generics"]),
    braces(false, &["arrays_slices"]),
    rule(
        r"\[\]\w+|\[\d+\]\w+|\bappend\s*\(|\bmake\s*\(\s*\[\]",
        &["arrays_slices"],
    ),
    braces(true, &["maps"]),
    rule(r"\bmap\s*\[|\bdelete\s*\(", &["maps"]),
    rule(r"\brange\s+\w+", &["range"]),
    rule(r"\bfor\b", &["for"]),
    rule(r"\bif\s+[^{\n]+\{", &["if_else"]),
    rule(r"\bswitch\b", &["switch"]),
    rule(
        r"\berrors\.New\s*\(|\bfmt\.Errorf\s*\(|\bif\s+err\s*!=\s*nil\b",
        &["errors"],
    ),
    rule(r"\bpanic\s*\(|\brecover\s*\(", &["panic_recover"]),
    rule(r"\bdefer\s+", &["defer"]),
    rule(r"\bgo\s+(?:func\b|[\w.]+\s*\()", &["goroutines"]),
    rule(r"\bchan\b|<-", &["channels"]),
    rule(r"\bselect\s*\{", &["select"]),
    rule(r"\bsync\.WaitGroup\b|\.Wait\s*\(\s*\)", &["waitgroups"]),
    rule(r"\bsync\.(?:RW)?Mutex\b|\.R?Lock\s*\(\s*\)", &["mutexes"]),
    rule(r"\batomic\.\w+", &["atomic"]),
    rule(
        r"\btime\.(?:NewTimer|NewTicker|After|Tick|Sleep)\s*\(",
        &["timers"],
    ),
    rule(r"\bstrings\.\w+\s*\(", &["strings"]),
    rule(r"\bfmt\.(?:Printf|Sprintf|Fprintf)\s*\(", &["string_formatting"]),
    rule(
        r#"\bjson\.(?:Marshal|Unmarshal|NewEncoder|NewDecoder)\w*\s*\(|`json:""#,
        &["json"],
    ),
    rule(
        r"\bos\.(?:ReadFile|Open)\s*\(|\bbufio\.NewScanner\s*\(",
        &["reading_files"],
    ),
    rule(
        r"\bos\.(?:WriteFile|Create)\s*\(|\bbufio\.NewWriter\s*\(",
        &["writing_files"],
    ),
    rule(
        r"\bhttp\.(?:HandleFunc|ListenAndServe|Handle)\s*\(",
        &["http_server"],
    ),
    rule(r"\bhttp\.(?:Get|Post|NewRequest)\s*\(|\bhttp\.Client\b", &["http_client"]),
    rule(r"\*testing\.T\b", &["testing"]),
    rule(r"\bos\.Args\b|\bflag\.\w+\s*\(", &["command_line"]),
    rule(
        r"\bos\.(?:Getenv|Setenv|LookupEnv|Environ)\s*\(",
        &["environment_variables"],
    ),
    rule(r"\btime\.(?:Now|Parse|Since|Duration|Unix)\b", &["time"]),
    rule(r"\bsort\.\w+\s*\(|\bslices\.Sort\w*\s*\(", &["sorting"]),
    rule(r"\bregexp\.\w+\s*\(", &["regular_expressions"]),
    rule(
        r"\bcontext\.(?:Background|WithCancel|WithTimeout|WithDeadline|WithValue|TODO)\s*\(",
        &["context"],
    ),
];

pub(super) const RUST: &[RuleSpec] = &[
    rule(r"\blet\s+(?:mut\s+)?\w+", &["variable_declarations"]),
    rule(r"\blet\s+mut\b|&mut\s", &["mutability"]),
    rule(r"\b(?:const|static)\s+[A-Z_][A-Z0-9_]*\s*:", &["constants"]),
    rule(
        r"\b(?:i8|i16|i32|i64|i128|isize|u8|u16|u32|u64|u128|usize|f32|f64|bool|char)\b",
        &["data_types"],
    ),
    rule(
        r"\bString::(?:from|new)\s*\(|\.to_string\s*\(\s*\)|&str\b|\bformat!\s*\(",
        &["string_type"],
    ),
    rule(r"\bfn\s+\w+", &["function_syntax"]),
    rule(
        r"\bif\s+[^{\n]+\{|\bloop\s*\{|\bwhile\s+|\bfor\s+\w+\s+in\b",
        &["control_flow"],
    ),
    rule(r"\.clone\s*\(\s*\)|\bmove\s*\||\bdrop\s*\(", &["ownership"]),
    rule(r"[(,=\s]&(?:mut\s+)?[a-z_]\w*", &["borrowing"]),
    rule(r"<\s*'[a-z]\w*|&'[a-z]\w*\s", &["lifetimes"]),
    rule(r"\bstruct\s+\w+", &["structs"]),
    rule(r"\(\s*&?(?:mut\s+)?self\b", &["method_syntax"]),
    rule(r"\benum\s+\w+", &["enums"]),
    rule(
        r"\bmatch\s+[^{\n]+\{|\bif\s+let\b|\bwhile\s+let\b",
        &["pattern_matching"],
    ),
    rule(
        r"\b(?:Some|None|Ok|Err)\b|\bOption\s*<|\bResult\s*<",
        &["option_result"],
    ),
    rule(r"[\w)]\?\s*[;.)]", &["error_propagation"]),
    rule(
        r"\bpanic!\s*\(|\.unwrap\s*\(\s*\)|\.expect\s*\(",
        &["panic_usage"],
    ),
    rule(
        r"\btrait\s+\w+|\bimpl\s+(?:<[^>]*>\s*)?[\w:]+(?:<[^>]*>)?\s+for\s+",
        &["traits"],
    ),
    rule(
        r"\b(?:fn|struct|enum|impl|trait)\s*\w*\s*<\s*[A-Z]",
        &["generic_types"],
    ),
    rule(r"\bdyn\s+\w+", &["trait_objects"]),
    rule(
        r"\|\w[\w\s,:&]*\|\s*[\w({&*]|\|\|\s*\{|\bmove\s*\|",
        &["closures"],
    ),
    rule(
        r"\.(?:iter|iter_mut|into_iter)\s*\(\s*\)|\.(?:map|filter|fold|collect|enumerate|zip|sum|rev|take|skip)\s*(?:::<[^>]*>)?\s*\(",
        &["iterators"],
    ),
    rule(r"\bVec\s*(?:<|::)|\bvec!\s*\[", &["vectors"]),
    rule(r"\b(?:HashMap|BTreeMap)\b", &["hash_maps"]),
    rule(r"\b(?:HashSet|BTreeSet)\b", &["hash_sets"]),
    rule(r"&\w+\s*\[\s*\w*\s*\.\.|&\[\w+\]", &["slices"]),
    rule(
        r"\b(?:Box|Rc|Arc|RefCell|Cell|Weak)\s*(?:<|::new)",
        &["smart_pointers"],
    ),
    rule(
        r"\bthread::spawn\s*\(|\b(?:Mutex|RwLock)\s*(?:<|::new)|\bmpsc::",
        &["concurrency"],
    ),
    rule(r"\basync\s+(?:fn|move|\{)|\.await\b", &["async"]),
    rule(r"\bmacro_rules!\s*\w+", &["macros"]),
    rule(r"#!?\[\w+", &["attributes"]),
    rule(
        r"\bmod\s+\w+|\buse\s+[\w:]+|\bpub\s+(?:fn|struct|enum|mod|trait)\b",
        &["modules"],
    ),
    rule(
        r"#\[test\]|#\[cfg\(test\)\]|\bassert(?:_eq|_ne)?!\s*\(",
        &["testing"],
    ),
    rule(r"\bunsafe\s*(?:\{|fn|impl)", &["unsafe"]),
    rule(
        r"\bimpl\s+(?:std::ops::)?(?:Add|Sub|Mul|Div|Neg|Index|AddAssign)\b",
        &["operator_overloading"],
    ),
    rule(
        r"\bas\s+(?:i8|i16|i32|i64|u8|u16|u32|u64|usize|isize|f32|f64|char)\b|\.(?:into|parse|try_into)\s*(?:::<[^>]*>)?\s*\(|\bFrom<",
        &["type_conversions"],
    ),
    rule(
        r"\bio::stdin\s*\(|\bread_line\s*\(|\bstd::io\b",
        &["io_operations"],
    ),
    rule(
        r"\bfs::(?:read_to_string|write|read|create_dir\w*)\b|\bFile::(?:open|create)\s*\(",
        &["file_io"],
    ),
];
