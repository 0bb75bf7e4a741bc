//! Rule tables for shell, command-line tooling and containers.

use super::{RuleSpec, rule};

pub(super) const SHELL: &[RuleSpec] = &[
    rule(r"(?m)^#!\s*/(?:usr/)?bin/(?:env\s+)?(?:ba|z|da)?sh\b", &["shebang"]),
    rule(r"(?m)^\s*#(?:[^!]|$)", &["comments"]),
    rule(
        r"(?m)^\s*(?:export\s+|local\s+|readonly\s+|declare\s+(?:-\w+\s+)?)?[A-Za-z_]\w*=",
        &["variables_decl"],
    ),
    rule(r"\$\{?[A-Za-z_]\w*\}?", &["variables_usage"]),
    rule(r"\$\{[^}]*(?::[-=?+]|#|%|/)[^}]*\}", &["param_expansion"]),
    rule(r"\b\w+=\(|\$\{\w+\[[@*]\]\}", &["arrays"]),
    rule(r"\bdeclare\s+-A\b", &["assoc_arrays"]),
    rule(r"\bif\b[^\n]*\bthen\b|(?m)^\s*fi\b", &["if_else"]),
    rule(
        r"\[\[?\s+[^\]\n]*-(?:eq|ne|lt|le|gt|ge|z|n|f|d|e|r|w|x|s)\b",
        &["cond_expr"],
    ),
    rule(r"\[\[?\s+[^\]\n]*\s(?:==|!=|=)\s", &["str_comparison"]),
    rule(r"\bcase\b[^\n]*\bin\b|\besac\b", &["case"]),
    rule(r"\bfor\s+\w+\s+in\b|\bfor\s*\(\(", &["for_loops"]),
    rule(r"\b(?:while|until)\b[^\n]*\bdo\b", &["while_loops"]),
    rule(r"(?m)^\s*(?:break|continue)\b", &["loop_control"]),
    rule(
        r"(?m)^\s*(?:function\s+\w+|\w+\s*\(\s*\))\s*\{?",
        &["func_def"],
    ),
    rule(r"\$\(\(|\blet\s+\w|\bexpr\s+", &["arith_expansion"]),
    rule(r"\$\([^(]|`[^`\n]+`", &["cmd_substitution"]),
    rule(r#""[^"\n]*\$\w+[^"\n]*""#, &["quoting"]),
    rule(r"\bread\s+(?:-\w+\s+)*\w+", &["read_input"]),
    rule(r"\$\?|\bexit\s+\d+", &["exit_status"]),
    rule(r"[^|]\|[^|]", &["pipeline"]),
    rule(r"\d?>>?\s*[\w/$&]|2>&1", &["redirection"]),
    rule(r"<<-?\s*['\x22]?\w+", &["here_doc"]),
    rule(r"[\s/]\*\.[a-zA-Z]+", &["globbing"]),
    rule(r"\$[1-9#@*]|\$\{[1-9]\}|\bshift\b", &["positional_params"]),
    rule(r"\$\$|\$!|\$0\b", &["special_vars"]),
    rule(r"\btrap\s+", &["trap"]),
    rule(r"\bset\s+[-+][euxo]", &["set_options"]),
    rule(r"(?m)^\s*(?:source|\.)\s+[\w/~.$-]+", &["source"]),
    rule(r"(?m)[^&]&[ \t]*$", &["background_jobs"]),
    rule(r#"\bprintf\s+["']"#, &["printf"]),
];

pub(super) const LINUX: &[RuleSpec] = &[
    rule(r"(?m)\bcd(?:\s|$)", &["cd"]),
    rule(r"\bpwd\b", &["pwd"]),
    rule(r"(?m)\bls(?:\s|$)", &["ls"]),
    rule(r"\bmkdir\s", &["mkdir"]),
    rule(r"\brm\s", &["rm"]),
    rule(r"\brmdir\s", &["rmdir"]),
    rule(r"\btouch\s", &["touch"]),
    rule(r"\bcp\s", &["cp"]),
    rule(r"\bmv\s", &["mv"]),
    rule(r"\bcat\s", &["cat"]),
    rule(r"\b(?:less|more)\s", &["less"]),
    rule(r"\bhead\s", &["head"]),
    rule(r"\btail\s", &["tail"]),
    rule(r"\becho\b", &["echo"]),
    rule(r"\b[ef]?grep\s", &["grep"]),
    rule(r"\bsed\s", &["sed"]),
    rule(r"\b[gm]?awk\s", &["awk"]),
    rule(r"(?m)\bsort(?:\s|$)", &["sort"]),
    rule(r"\buniq\b", &["uniq"]),
    rule(r"\bwc\b", &["wc"]),
    rule(r"\bcut\s+-", &["cut"]),
    rule(r#"\btr\s+['"\-\[]"#, &["tr"]),
    rule(r"\bfind\s+[./~\w]", &["find"]),
    rule(r"\bxargs\b", &["xargs"]),
    rule(r"\bchmod\s", &["chmod"]),
    rule(r"\bchown\s", &["chown"]),
    rule(r"\bps\s+(?:-|aux|ef)", &["ps"]),
    rule(r"\b(?:kill|pkill|killall)\s", &["kill"]),
    rule(r"\b(?:top|htop)\b", &["top"]),
    rule(r"\b(?:df|du)\s+-", &["df"]),
    rule(r"\btar\s", &["tar"]),
    rule(r"\b(?:zip|unzip|gzip|gunzip)\s", &["gzip"]),
    rule(r"\b(?:wget|curl)\s", &["wget"]),
    rule(r"\b(?:ssh|scp|rsync)\s", &["ssh"]),
    rule(r"\bsudo\s", &["sudo"]),
    rule(r"\bapt(?:-get)?\s+(?:install|update|upgrade|remove)\b", &["apt"]),
    rule(
        r"\b(?:useradd|adduser|usermod|userdel|passwd|groupadd)\b",
        &["useradd"],
    ),
    rule(r"\b(?:export|env|printenv)\b", &["env"]),
    rule(r"\b(?:which|whereis)\s+\w", &["which"]),
    rule(r"\bln\s+-s", &["ln"]),
    rule(r"\bdiff\s", &["diff"]),
    rule(r"\bdate\b", &["date"]),
    rule(r"\b(?:systemctl|service)\s", &["service"]),
    rule(r"\bcrontab\b", &["crontab"]),
    rule(r"\d?>>?\s*[\w/]", &["redirect"]),
    rule(r"[^|]\|[^|]", &["pipeline"]),
    rule(r"\b(?:nohup|jobs|bg|fg)\b", &["jobs"]),
    rule(r"\bman\s+\w", &["man"]),
    rule(r"\btree\b", &["tree"]),
    rule(r"\bwhoami\b", &["whoami"]),
    rule(r"\b(?:ping|netstat|ifconfig)\s|\bip\s+a(?:ddr)?\b", &["ping"]),
    rule(r"\b(?:vim?|nano)\s+[\w./~]", &["vim"]),
    rule(r"\bhistory\b", &["history"]),
    rule(r"\balias\s+\w+=", &["alias"]),
];

pub(super) const GIT: &[RuleSpec] = &[
    rule(r"\bgit\s+init\b", &["init"]),
    rule(r"\bgit\s+clone\b", &["clone"]),
    rule(r"\bgit\s+config\b", &["config"]),
    rule(r"\bgit\s+add\b", &["add"]),
    rule(r"\bgit\s+commit\b", &["commit"]),
    rule(r"\bgit\s+status\b", &["status"]),
    rule(r"\bgit\s+diff\b", &["diff"]),
    rule(r"\bgit\s+log\b", &["log"]),
    rule(r"\bgit\s+branch\b", &["branch"]),
    rule(r"\bgit\s+(?:checkout|switch)\b", &["checkout"]),
    rule(r"\bgit\s+merge\b", &["merge"]),
    rule(r"\bgit\s+rebase\b", &["rebase"]),
    rule(r"\bgit\s+remote\b", &["remote"]),
    rule(r"\bgit\s+push\b", &["push"]),
    rule(r"\bgit\s+pull\b", &["pull"]),
    rule(r"\bgit\s+fetch\b", &["fetch"]),
    rule(r"\bgit\s+stash\b", &["stash"]),
    rule(r"\bgit\s+reset\b", &["reset"]),
    rule(r"\bgit\s+revert\b", &["revert"]),
    rule(r"\bgit\s+restore\b", &["restore"]),
    rule(r"\bgit\s+tag\b", &["tag"]),
    rule(r"\bgit\s+cherry-pick\b", &["cherry_pick"]),
    rule(r"\bgit\s+show\b", &["show"]),
    rule(r"\bgit\s+rm\b", &["rm"]),
    rule(r"\bgit\s+mv\b", &["mv"]),
    rule(r"\bgit\s+blame\b", &["blame"]),
    rule(r"\bgit\s+bisect\b", &["bisect"]),
    rule(r"\bgit\s+reflog\b", &["reflog"]),
    rule(r"\bgit\s+submodule\b", &["submodule"]),
    rule(r"\bgit\s+clean\b", &["clean"]),
    rule(r"\bgit\s+worktree\b", &["worktree"]),
    rule(r"\.gitignore\b", &["ignore"]),
    rule(r"\bgit\s+config\b[^\n]*\balias\.", &["alias"]),
];

pub(super) const DOCKER: &[RuleSpec] = &[
    rule(r"\bdocker\s+(?:container\s+)?run\b", &["run"]),
    rule(r"\bdocker\s+(?:container\s+)?(?:ps|ls)\b", &["ps"]),
    rule(r"\bdocker\s+(?:images|image\s+ls)\b", &["images"]),
    rule(r"\bdocker\s+(?:image\s+)?pull\b", &["pull"]),
    rule(r"\bdocker\s+(?:image\s+)?push\b", &["push"]),
    rule(r"\bdocker\s+(?:image\s+)?build\b|\bdocker\s+buildx\b", &["build"]),
    rule(r"\bdocker\s+(?:image\s+)?tag\b", &["tag"]),
    rule(r"\bdocker\s+(?:container\s+)?exec\b", &["exec"]),
    rule(r"\bdocker\s+(?:container\s+)?logs\b", &["logs"]),
    rule(
        r"\bdocker\s+(?:container\s+)?(?:start|stop|restart|pause|unpause|kill)\b",
        &["start_stop"],
    ),
    rule(
        r"\bdocker\s+(?:container\s+)?rm\b|\bdocker\s+rmi\b|\bdocker\s+\w+\s+prune\b",
        &["remove"],
    ),
    rule(r"\bdocker\s+(?:\w+\s+)?inspect\b", &["inspect"]),
    rule(r"\bdocker\s+volume\b|\s-v\s+[\w/.$-]+:|--mount\b", &["volumes"]),
    rule(r"\bdocker\s+network\b|--network\b", &["networks"]),
    rule(r"\s-p\s+\d+:\d+|--publish\b|(?m)^\s*EXPOSE\s+\d+", &["port_mapping"]),
    rule(r"\s-e\s+\w+=|--env(?:-file)?\b|(?m)^\s*ENV\s+\w+", &["env_vars"]),
    rule(r"\bdocker[\s-]compose\b", &["compose"]),
    rule(r"(?m)^\s*FROM\s+\S+", &["dockerfile_from"]),
    rule(r"(?m)^\s*RUN\s+", &["dockerfile_run"]),
    rule(r"(?m)^\s*(?:COPY|ADD)\s+", &["dockerfile_copy"]),
    rule(r"(?m)^\s*WORKDIR\s+", &["dockerfile_workdir"]),
    rule(r"(?m)^\s*(?:CMD|ENTRYPOINT)\s+", &["dockerfile_cmd"]),
    rule(r"(?m)^\s*ARG\s+", &["dockerfile_args"]),
    rule(r"(?m)^\s*FROM\s+\S+\s+(?i:as)\s+\w+", &["multi_stage"]),
    rule(r"(?m)^\s*HEALTHCHECK\s+", &["healthcheck"]),
    rule(r"\bdocker\s+(?:login|logout)\b", &["registry"]),
    rule(r"\bdocker\s+(?:system|info|version|stats)\b", &["system"]),
    rule(r"\bdocker\s+(?:commit|save|load|export|import)\b", &["commit_save"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::language::LanguageKey;
    use crate::skills::patterns::PatternExtractor;

    #[test]
    fn shell_loop_and_conditionals() {
        let ex = PatternExtractor::compile(LanguageKey::Shell, SHELL);
        let skills = ex.scan(
            "#!/bin/bash\n\
             for f in *.txt; do\n\
             \x20 if [ -f \"$f\" ]; then\n\
             \x20   echo \"$f\" | wc -l\n\
             \x20 fi\n\
             done\n",
        );
        for tag in [
            "shell/shebang",
            "shell/for_loops",
            "shell/if_else",
            "shell/cond_expr",
            "shell/pipeline",
        ] {
            assert!(skills.contains(tag), "missing {tag}");
        }
        assert!(!skills.contains("shell/case"));
    }

    #[test]
    fn shebang_is_not_a_comment() {
        let ex = PatternExtractor::compile(LanguageKey::Shell, SHELL);
        assert!(!ex.scan("#!/bin/sh\necho hi\n").contains("shell/comments"));
        assert!(ex.scan("# greet\necho hi\n").contains("shell/comments"));
    }

    #[test]
    fn git_workflow() {
        let ex = PatternExtractor::compile(LanguageKey::Git, GIT);
        let skills = ex.scan("git add .\ngit commit -m 'init'\ngit push origin main\n");
        assert!(skills.contains("git/add"));
        assert!(skills.contains("git/commit"));
        assert!(skills.contains("git/push"));
        assert!(!skills.contains("git/pull"));
    }

    #[test]
    fn dockerfile_multi_stage() {
        let ex = PatternExtractor::compile(LanguageKey::Docker, DOCKER);
        let skills = ex.scan(
            "FROM rust:1.85 AS build\nWORKDIR /src\nCOPY . .\nRUN cargo build --release\n\
             FROM debian:stable-slim\nCOPY --from=build /src/target/release/app /app\nCMD [\"/app\"]\n",
        );
        for tag in [
            "docker/dockerfile_from",
            "docker/multi_stage",
            "docker/dockerfile_workdir",
            "docker/dockerfile_copy",
            "docker/dockerfile_run",
            "docker/dockerfile_cmd",
        ] {
            assert!(skills.contains(tag), "missing {tag}");
        }
    }
}
