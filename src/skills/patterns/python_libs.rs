//! Rule tables for Python library dialects.

use super::{RuleSpec, rule};

pub(super) const PANDAS: &[RuleSpec] = &[
    rule(r"\bDataFrame\s*\(", &["create_dataframe"]),
    rule(r"\bSeries\s*\(", &["create_series"]),
    rule(r"\bread_csv\s*\(", &["read_csv"]),
    rule(r"\bread_excel\s*\(", &["read_excel"]),
    rule(r"\bread_json\s*\(", &["read_json"]),
    rule(r"\.to_(?:csv|excel|json|sql|parquet)\s*\(", &["write_data"]),
    rule(r"\.(?:head|tail|info)\s*\(", &["display_data"]),
    rule(
        r"\.(?:describe|mean|median|std|sum|min|max|value_counts)\s*\(",
        &["basic_statistics"],
    ),
    rule(r#"\w\[\s*\[?\s*['"][^'"]+['"]"#, &["select_columns"]),
    rule(r"\.(?:loc|iloc|at|iat)\[", &["select_rows"]),
    rule(
        r#"\w\[\s*\(?\s*\w+\s*\[\s*['"][^'"]+['"]\s*\]\s*(?:[<>]=?|==|!=)"#,
        &["conditional_selection"],
    ),
    rule(r"\.query\s*\(", &["conditional_selection"]),
    rule(r#"\w\[\s*['"][^'"]+['"]\s*\]\s*=[^=]"#, &["add_new_columns"]),
    rule(r"\.assign\s*\(", &["add_new_columns"]),
    rule(r"\.drop\s*\(", &["drop_columns"]),
    rule(r"\.rename\s*\(", &["rename_columns"]),
    rule(r"\.(?:set_index|reset_index|reindex)\s*\(", &["index_operations"]),
    rule(
        r"\.(?:isna|isnull|notna|notnull|fillna|dropna|interpolate)\s*\(",
        &["handle_missing_values"],
    ),
    rule(r"\.(?:drop_duplicates|duplicated)\s*\(", &["remove_duplicates"]),
    rule(r"\.astype\s*\(|\bto_numeric\s*\(", &["change_data_types"]),
    rule(r"\.sort_(?:values|index)\s*\(", &["sort_data"]),
    rule(r"\.groupby\s*\(", &["groupby_operations"]),
    rule(r"\bpivot(?:_table)?\s*\(", &["pivot_tables"]),
    rule(r"\.merge\s*\(|\bpd\.merge\s*\(", &["merge_dataframes"]),
    rule(r"\bconcat\s*\(", &["concat_dataframes"]),
    rule(r"\.(?:melt|stack|unstack|transpose)\s*\(|\bmelt\s*\(", &["reshape_data"]),
    rule(
        r"\.(?:apply|map|applymap|transform|agg|aggregate)\s*\(",
        &["apply_functions"],
    ),
    rule(r"\.str\.\w+", &["string_operations"]),
    rule(
        r"\bto_datetime\s*\(|\.resample\s*\(|\bdate_range\s*\(|\.dt\.\w+|\.rolling\s*\(",
        &["time_series_analysis"],
    ),
    rule(r"\.plot(?:\.\w+)?\s*\(", &["data_visualization"]),
];

pub(super) const NUMPY: &[RuleSpec] = &[
    rule(
        r"\bnp\.(?:array|zeros|ones|empty|full|eye|identity)\s*\(",
        &["array_creation"],
    ),
    rule(r"\bnp\.(?:arange|linspace|logspace)\s*\(", &["ranges"]),
    rule(r"\.reshape\s*\(|\bnp\.reshape\s*\(|\.flatten\s*\(|\.ravel\s*\(", &["reshape"]),
    rule(r"\.T\b|\.transpose\s*\(", &["transpose"]),
    rule(r"\w\[\s*-?\d*\s*:\s*-?\d*", &["indexing_slicing"]),
    rule(r"\w\[[^\]\n]*,[^\]\n]*\]", &["indexing_slicing"]),
    rule(r"\w\[\s*\w+\s*(?:[<>]=?|==|!=)[^\]]*\]", &["boolean_indexing"]),
    rule(r"\w\[\s*\[\s*\d+\s*,", &["fancy_indexing"]),
    rule(
        r"\bnp\.(?:sqrt|exp|log|log10|log2|sin|cos|tan|abs|power|round|floor|ceil)\s*\(",
        &["math_functions"],
    ),
    rule(
        r"\bnp\.(?:mean|median|std|var|percentile|average|min|max|sum|argmax|argmin)\s*\(",
        &["statistics"],
    ),
    rule(r"\.(?:mean|std|var|sum)\s*\(\s*axis", &["statistics"]),
    rule(
        r"\bnp\.linalg\.|\bnp\.(?:dot|matmul|inner|outer|cross)\s*\(|[\w)\]][ \t]*@[ \t]*[\w(]",
        &["linear_algebra"],
    ),
    rule(r"\bnp\.random\.", &["random"]),
    rule(
        r"\bnp\.newaxis\b|\[\s*:\s*,\s*None\s*\]|\bbroadcast_to\s*\(",
        &["broadcasting"],
    ),
    rule(
        r"\bnp\.(?:concatenate|vstack|hstack|stack|dstack|split|hsplit|vsplit|array_split)\s*\(",
        &["stacking_splitting"],
    ),
    rule(
        r"\bdtype\s*=|\.astype\s*\(|\bnp\.(?:int8|int16|int32|int64|uint8|float16|float32|float64|complex64|complex128|bool_)\b",
        &["data_types"],
    ),
    rule(
        r"\bnp\.(?:add|subtract|multiply|divide|maximum|minimum|frompyfunc|vectorize)\s*\(",
        &["universal_functions"],
    ),
    rule(
        r"\bnp\.(?:save|savez|savetxt|load|loadtxt|genfromtxt)\s*\(",
        &["file_io"],
    ),
    rule(
        r"\bnp\.(?:sort|argsort|where|searchsorted|unique|nonzero)\s*\(",
        &["sorting_searching"],
    ),
    rule(r"\bnp\.copy\s*\(|\.copy\s*\(\s*\)|\.view\s*\(\s*\)", &["copying"]),
    rule(r"\.(?:shape|ndim|itemsize|nbytes)\b", &["attributes"]),
];

pub(super) const MATPLOTLIB: &[RuleSpec] = &[
    rule(r"\bplt\.plot\s*\(|\bax\w*\.plot\s*\(", &["line_plots"]),
    rule(r"\.scatter\s*\(", &["scatter_plots"]),
    rule(r"\.barh?\s*\(", &["bar_charts"]),
    rule(r"\.hist\s*\(", &["histograms"]),
    rule(r"\.pie\s*\(", &["pie_charts"]),
    rule(r"\.(?:boxplot|violinplot)\s*\(", &["box_plots"]),
    rule(r"\.(?:imshow|pcolormesh|matshow)\s*\(", &["heatmaps"]),
    rule(r"\.contourf?\s*\(", &["contour_plots"]),
    rule(
        r#"projection\s*=\s*['"]3d['"]|\bAxes3D\b|\.plot_surface\s*\("#,
        &["3d_plots"],
    ),
    rule(r"\.subplots?\s*\(|\.add_subplot\s*\(|\bGridSpec\b", &["subplots"]),
    rule(r"\bplt\.figure\s*\(|\.add_axes\s*\(|\bfig\s*,\s*axe?s?\b", &["figures_axes"]),
    rule(
        r"\.(?:title|set_title|xlabel|ylabel|set_xlabel|set_ylabel|suptitle)\s*\(",
        &["titles_labels"],
    ),
    rule(r"\.legend\s*\(", &["legend_config"]),
    rule(
        r"\.(?:xticks|yticks|set_xticks|set_yticks|set_xticklabels|set_yticklabels|tick_params)\s*\(",
        &["axis_ticks"],
    ),
    rule(r"\.(?:xlim|ylim|set_xlim|set_ylim|axis)\s*\(", &["axis_limits"]),
    rule(r"\.grid\s*\(", &["grid_config"]),
    rule(r"\.(?:annotate|text)\s*\(", &["annotations"]),
    rule(r"\b(?:linestyle|linewidth|marker|markersize)\s*=", &["line_styles"]),
    rule(r"\bcmap\s*=|\bcolorbar\s*\(|\bplt\.cm\.", &["colormaps"]),
    rule(r"\.savefig\s*\(", &["saving_figures"]),
    rule(r"\bplt\.show\s*\(", &["display_plots"]),
    rule(r"\bplt\.style\.use\s*\(|\brcParams\b", &["styles"]),
    rule(r"\bFuncAnimation\b|\bmatplotlib\.animation\b", &["animations"]),
    rule(r"\.errorbar\s*\(|\.fill_between\s*\(", &["error_bars"]),
];

pub(super) const SKLEARN: &[RuleSpec] = &[
    rule(
        r"\bsklearn\.datasets\b|\b(?:load|fetch)_\w+\s*\(|\bmake_(?:classification|regression|blobs|moons|circles)\s*\(",
        &["datasets"],
    ),
    rule(r"\btrain_test_split\s*\(", &["train_test_split"]),
    rule(
        r"\bcross_val(?:_score|idate|_predict)\s*\(|\b(?:Stratified)?KFold\s*\(",
        &["cross_validation"],
    ),
    rule(r"\b(?:GridSearchCV|RandomizedSearchCV)\s*\(", &["hyperparameter_tuning"]),
    rule(
        r"\b(?:StandardScaler|MinMaxScaler|RobustScaler|Normalizer|LabelEncoder|OneHotEncoder|OrdinalEncoder|PolynomialFeatures|Binarizer)\s*\(",
        &["preprocessing"],
    ),
    rule(r"\b(?:SimpleImputer|KNNImputer|IterativeImputer)\s*\(", &["impute"]),
    rule(
        r"\b(?:Pipeline|make_pipeline|ColumnTransformer|make_column_transformer)\s*\(",
        &["pipeline"],
    ),
    rule(
        r"\b(?:LinearRegression|LogisticRegression|Ridge|Lasso|ElasticNet|SGDClassifier|SGDRegressor|Perceptron)\s*\(",
        &["linear_models"],
    ),
    rule(r"\b(?:SVC|SVR|LinearSVC|LinearSVR|NuSVC|OneClassSVM)\s*\(", &["svm"]),
    rule(r"\bDecisionTree(?:Classifier|Regressor)\s*\(", &["tree"]),
    rule(
        r"\b(?:RandomForest|GradientBoosting|HistGradientBoosting|AdaBoost|Bagging|ExtraTrees|Voting|Stacking)\w*\s*\(",
        &["ensemble"],
    ),
    rule(
        r"\b(?:KNeighborsClassifier|KNeighborsRegressor|NearestNeighbors)\s*\(",
        &["neighbors"],
    ),
    rule(
        r"\b(?:GaussianNB|MultinomialNB|BernoulliNB|ComplementNB)\s*\(",
        &["naive_bayes"],
    ),
    rule(
        r"\b(?:KMeans|DBSCAN|AgglomerativeClustering|MeanShift|SpectralClustering|Birch|MiniBatchKMeans)\s*\(",
        &["cluster"],
    ),
    rule(r"\b(?:PCA|TruncatedSVD|NMF|FastICA|KernelPCA)\s*\(", &["decomposition"]),
    rule(r"\b(?:TSNE|Isomap|LocallyLinearEmbedding|MDS)\s*\(", &["manifold"]),
    rule(
        r"\b(?:SelectKBest|RFE|RFECV|SelectFromModel|VarianceThreshold)\s*\(",
        &["feature_selection"],
    ),
    rule(
        r"\b(?:CountVectorizer|TfidfVectorizer|TfidfTransformer|HashingVectorizer|DictVectorizer)\s*\(",
        &["feature_extraction"],
    ),
    rule(
        r"\b(?:accuracy_score|precision_score|recall_score|f1_score|confusion_matrix|classification_report|roc_auc_score|roc_curve|mean_squared_error|mean_absolute_error|r2_score|silhouette_score)\s*\(",
        &["metrics"],
    ),
    rule(r"\.fit(?:_transform)?\s*\(", &["model_training"]),
    rule(r"\.predict(?:_proba)?\s*\(", &["model_prediction"]),
    rule(r"\bMLP(?:Classifier|Regressor)\s*\(", &["neural_network"]),
];

pub(super) const DJANGO: &[RuleSpec] = &[
    rule(r"\bmodels\.Model\b|\bmodels\.\w+Field\s*\(", &["models"]),
    rule(
        r"\bmodels\.(?:ForeignKey|ManyToManyField|OneToOneField)\s*\(",
        &["model_relationships"],
    ),
    rule(
        r"\.objects\.(?:all|filter|get|exclude|create|order_by|values|annotate|aggregate|count|first|last|update|delete|get_or_create)\s*\(",
        &["orm_queries"],
    ),
    rule(
        r"\bdef\s+\w+\s*\(\s*request\b|\b(?:render|redirect|get_object_or_404)\s*\(",
        &["views"],
    ),
    rule(
        r"\b(?:View|TemplateView|ListView|DetailView|CreateView|UpdateView|DeleteView|FormView|RedirectView)\s*\)",
        &["class_based_views"],
    ),
    rule(
        r#"\b(?:path|re_path)\s*\(\s*r?['"]|\burlpatterns\s*=|\binclude\s*\(\s*['"]"#,
        &["url_routing"],
    ),
    rule(r"\{%\s*\w+|\{\{\s*[\w.]+", &["templates"]),
    rule(r"\{%\s*(?:extends|block)\b", &["template_inheritance"]),
    rule(
        r"\bforms\.(?:Form|ModelForm)\b|\bforms\.\w+Field\s*\(",
        &["forms"],
    ),
    rule(
        r"\badmin\.site\.register\s*\(|\badmin\.ModelAdmin\b|@admin\.register\b",
        &["admin"],
    ),
    rule(r"\b(?:makemigrations|migrate)\b|\bmigrations\.\w+\s*\(", &["migrations"]),
    rule(r"\bmanage\.py\s+\w+|\bdjango-admin\s+\w+", &["manage_commands"]),
    rule(
        r"\bINSTALLED_APPS\b|\bDATABASES\s*=|\bMIDDLEWARE\b|\bsettings\.[A-Z_]+\b",
        &["settings"],
    ),
    rule(
        r"\b(?:authenticate|login|logout)\s*\(\s*request|@login_required\b|\bUserCreationForm\b|django\.contrib\.auth",
        &["authentication"],
    ),
    rule(
        r"\{%\s*load\s+static\b|\{%\s*static\s|\bSTATIC_URL\b|\bSTATICFILES_DIRS\b",
        &["static_files"],
    ),
    rule(
        r"\brest_framework\b|\bserializers\.\w*Serializer\b|\bAPIView\b",
        &["rest_api"],
    ),
    rule(r"\bdjango\.test\b|\bself\.client\.(?:get|post)\s*\(", &["testing"]),
];

pub(super) const FLASK: &[RuleSpec] = &[
    rule(r"\bFlask\s*\(\s*__name__", &["app_creation"]),
    rule(r"@\w+\.(?:route|get|post)\s*\(", &["routing"]),
    rule(r"\bmethods\s*=\s*\[", &["http_methods"]),
    rule(r#"\.route\s*\(\s*['"][^'"]*<[^>]+>"#, &["dynamic_routes"]),
    rule(r"\brender_template(?:_string)?\s*\(", &["templates"]),
    rule(r"\{%\s*\w+|\{\{\s*[\w.]+", &["jinja_syntax"]),
    rule(
        r"\brequest\.(?:form|args|json|files|method|get_json|values|cookies|headers)\b",
        &["request_handling"],
    ),
    rule(r"\b(?:jsonify|make_response|Response)\s*\(", &["responses"]),
    rule(r"\b(?:redirect|url_for)\s*\(", &["redirects"]),
    rule(r"\babort\s*\(|@\w+\.errorhandler\s*\(", &["errors"]),
    rule(r"\bsession\[|\bsecret_key\b|\bSECRET_KEY\b", &["sessions"]),
    rule(r"\bflash\s*\(|\bget_flashed_messages\s*\(", &["flash_messages"]),
    rule(r"\bBlueprint\s*\(|\.register_blueprint\s*\(", &["blueprints"]),
    rule(r"\bSQLAlchemy\s*\(|\bdb\.(?:Model|Column|session)\b", &["database"]),
    rule(r"\bapp\.config\[|\bapp\.config\.from_\w+\s*\(", &["configuration"]),
    rule(r"\bapp\.run\s*\(|\bflask\s+run\b", &["run_server"]),
    rule(r#"url_for\s*\(\s*['"]static['"]"#, &["static_files"]),
    rule(
        r"@\w+\.(?:before_request|after_request|teardown_request|before_first_request)\b",
        &["hooks"],
    ),
];

pub(super) const PYGAME: &[RuleSpec] = &[
    rule(r"\bpygame\.init\s*\(", &["initialization"]),
    rule(
        r"\bpygame\.display\.(?:set_mode|set_caption|flip|update)\s*\(",
        &["display"],
    ),
    rule(
        r"\bpygame\.event\.(?:get|poll|wait)\s*\(|\bevent\.type\s*==",
        &["event_handling"],
    ),
    rule(
        r"\bpygame\.K_\w+|\bpygame\.key\.get_pressed\s*\(|\bKEYDOWN\b|\bKEYUP\b",
        &["keyboard_input"],
    ),
    rule(
        r"\bpygame\.mouse\.\w+|\bMOUSEBUTTON(?:DOWN|UP)\b|\bMOUSEMOTION\b",
        &["mouse_input"],
    ),
    rule(
        r"\bpygame\.draw\.(?:rect|circle|line|lines|polygon|ellipse|arc|aaline)\s*\(",
        &["drawing_shapes"],
    ),
    rule(r"\bpygame\.Surface\s*\(|\.blit\s*\(|\.fill\s*\(", &["surfaces"]),
    rule(
        r"\bpygame\.image\.load\s*\(|\bpygame\.transform\.\w+\s*\(",
        &["images"],
    ),
    rule(r"\bpygame\.sprite\.\w+", &["sprites"]),
    rule(
        r"\.collide(?:rect|point|list)\s*\(|\bspritecollide\w*\s*\(|\bgroupcollide\s*\(",
        &["collision_detection"],
    ),
    rule(r"\bpygame\.Rect\s*\(|\.get_rect\s*\(", &["rect"]),
    rule(r"\bpygame\.font\.\w+|\.render\s*\(", &["fonts_text"]),
    rule(r"\bpygame\.mixer\.\w+", &["sound_music"]),
    rule(r"\bwhile\s+(?:True|running|run|not\s+done)\s*:", &["game_loop"]),
    rule(r"\bpygame\.time\.Clock\s*\(|\.tick\s*\(", &["frame_rate"]),
    rule(r"\bpygame\.quit\s*\(|\bpygame\.QUIT\b", &["quit"]),
];

pub(super) const TKINTER: &[RuleSpec] = &[
    rule(r"\bTk\s*\(\s*\)", &["root_window"]),
    rule(r"\.mainloop\s*\(", &["main_loop"]),
    rule(
        r"\.(?:title|geometry|resizable|configure|config|minsize|maxsize)\s*\(",
        &["window_config"],
    ),
    rule(r"\bLabel\s*\(", &["labels"]),
    rule(r"\bButton\s*\(", &["buttons"]),
    rule(r"\bEntry\s*\(|\bText\s*\(", &["entry_widgets"]),
    rule(r"\b(?:Checkbutton|Radiobutton)\s*\(", &["check_radio"]),
    rule(r"\b(?:Listbox|Combobox|Spinbox|OptionMenu)\s*\(", &["listbox_combobox"]),
    rule(
        r"\bCanvas\s*\(|\.create_(?:line|rectangle|oval|polygon|text|image|arc)\s*\(",
        &["canvas"],
    ),
    rule(r"\b(?:Frame|LabelFrame|PanedWindow)\s*\(", &["frames"]),
    rule(r"\bMenu\s*\(|\.add_(?:command|cascade|separator)\s*\(", &["menus"]),
    rule(r"\.pack\s*\(", &["layout_pack"]),
    rule(r"\.grid\s*\(", &["layout_grid"]),
    rule(r"\.place\s*\(", &["layout_place"]),
    rule(r#"\.bind\s*\(\s*['"]<|\bcommand\s*="#, &["event_binding"]),
    rule(r"\b(?:StringVar|IntVar|DoubleVar|BooleanVar)\s*\(", &["variables"]),
    rule(
        r"\b(?:messagebox|filedialog|simpledialog|colorchooser)\.\w+\s*\(",
        &["dialogs"],
    ),
    rule(r"\bScrollbar\s*\(", &["scrollbars"]),
    rule(r"\.after\s*\(", &["timers"]),
];
