//! Test fixtures - reusable documents for tests.
//!
//! Every fixture except `HAND_WRITTEN` is already in canonical form: emitting
//! the parsed document reproduces it byte for byte.

/// A two-service stack exercising every union form
pub const FULL_STACK: &str = r#"version: "3.8"
services:
  web:
    image: "nginx:1.25"
    build:
      context: "."
      args:
      - "VERSION=1.2"
      - "GIT_SHA"
    command: [npm, run, start]
    environment:
      NODE_ENV: "production"
      API_TOKEN:
    ports:
    - target: 80
      published: 8080
      protocol: "tcp"
    - target: 9000
      published: "9000-9010"
    volumes:
    - "./data:/app/data"
    - source: "cache"
      target: "/app/cache"
      type: "volume"
      volume:
        nocopy: true
    secrets:
    - "db_password"
    - source: "api_key"
      target: "/run/secrets/api"
      uid: "1000"
      gid: "1000"
      mode: 0440
    configs:
    - source: "nginx_conf"
      target: "/etc/nginx/nginx.conf"
      mode: 0o644
    networks:
    - "front"
    depends_on:
    - "db"
    deploy:
      mode: replicated
      replicas: 2
      update_config:
        parallelism: 1
        delay: "10s"
        order: start-first
      restart_policy:
        condition: on-failure
        max_attempts: 3
      placement:
        constraints: [node.role==manager]
      resources:
        limits:
          cpus: "0.5"
          memory: "512M"
  db:
    image: "postgres:16"
    volumes:
    - "db-data:/var/lib/postgresql/data"
networks:
  front:
volumes:
  db-data:
secrets:
  db_password:
    file: "./secrets/db.txt"
  api_key:
    external: true
configs:
  nginx_conf:
    file: "./nginx.conf"
"#;

/// Secrets in all three mode spellings
pub const MODE_SPELLINGS: &str = r#"services:
  app:
    secrets:
    - source: "a"
      target: "/run/a"
      mode: 0400
    - source: "b"
      target: "/run/b"
      mode: 0o440
    - source: "c"
      target: "/run/c"
      mode: 256
"#;

/// Author-formatted input: unquoted strings, flow mappings, comments
pub const HAND_WRITTEN: &str = r#"# production stack
version: 3.8
services:
  web:
    image: nginx   # pinned later
    command: ["nginx", "-g", "daemon off;"]
    volumes:
      - ./html:/usr/share/nginx/html:ro
    secrets:
      - site_cert
      - { source: site_key, target: /run/secrets/key, mode: 0o400 }
    ports:
      - { target: 443, published: 443 }
"#;
